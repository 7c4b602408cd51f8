//! Доменный слой интеграций контента: модель элементов, колонки, фасеты,
//! поиск, выбор и жизненный цикл панели провайдера. Без DOM и wasm.

pub mod domain;
pub mod shared;
