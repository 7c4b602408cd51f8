//! Тестовые данные для модулей выбора контента

use super::column::{BadgeTone, ColumnDescriptor, ColumnSet};
use super::facet::{FacetOption, FacetSet, FilterFacet};
use super::item::{ContentItem, ItemBase, ItemExtension, ItemField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishField {
    Course,
    Method,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub course: String,
    pub method: String,
}

impl Dish {
    pub fn new(course: &str, method: &str) -> Self {
        Self {
            course: course.to_string(),
            method: method.to_string(),
        }
    }
}

impl ItemExtension for Dish {
    type Field = DishField;

    fn value(&self, field: DishField) -> Option<String> {
        match field {
            DishField::Course => Some(self.course.clone()),
            DishField::Method => Some(self.method.clone()),
        }
    }
}

fn course_tone(course: &str) -> BadgeTone {
    match course {
        "dessert" => BadgeTone::Brand,
        _ => BadgeTone::Neutral,
    }
}

pub fn dish_item(id: &str, name: &str, selected: bool) -> ContentItem<Dish> {
    let extra = match name {
        "Fried Chicken" => Dish::new("main", "fried"),
        "Garlic Bread" => Dish::new("main", "baked"),
        _ => Dish::new("dessert", "baked"),
    };
    ContentItem::new(ItemBase::new(id, name).selected(selected), extra)
}

/// c1 Apple Pie, c2 Banana Bread (выбран), c3 Fried Chicken, c4 Garlic Bread
pub fn dish_collection() -> Vec<ContentItem<Dish>> {
    vec![
        dish_item("c1", "Apple Pie", false),
        dish_item("c2", "Banana Bread", true),
        dish_item("c3", "Fried Chicken", false),
        dish_item("c4", "Garlic Bread", false),
    ]
}

pub fn dish_columns() -> ColumnSet<Dish> {
    ColumnSet::new(vec![
        ColumnDescriptor::select_checkbox("select", 1),
        ColumnDescriptor::text("name", "Название", 5, ItemField::Name),
        ColumnDescriptor::badge("course", "Блюдо", 3, ItemField::Ext(DishField::Course), course_tone),
        ColumnDescriptor::text("method", "Способ", 3, ItemField::Ext(DishField::Method)),
    ])
}

pub fn dish_facets() -> FacetSet<DishField> {
    FacetSet::new(vec![
        FilterFacet::new(
            "course",
            "Блюдо",
            ItemField::Ext(DishField::Course),
            vec![
                FacetOption::all("Все"),
                FacetOption::new("dessert", "Десерты"),
                FacetOption::new("main", "Основные"),
            ],
        ),
        FilterFacet::new(
            "method",
            "Способ",
            ItemField::Ext(DishField::Method),
            vec![
                FacetOption::all("Все"),
                FacetOption::new("baked", "Выпечка"),
                FacetOption::new("fried", "Жарка"),
            ],
        ),
    ])
}
