pub mod badge;

pub use badge::{tone_class, Badge};
