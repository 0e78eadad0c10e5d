//! Adapters implementing the dispatch domain ports

pub mod yandex;

pub use yandex::{YandexDispatchAdapter, DispatchApiConfig};
