//! Tests against the bundled recipe dataset.

use crate::common::bundled_book;
use salem_core::index::build_index;
use salem_core::render::render_ingredient;
use salem_core::RecipeId;

#[test]
fn test_bundled_dataset_loads() {
    let book = bundled_book();
    assert_eq!(book.title(), "Salem Recipe Book");
    assert_eq!(book.len(), 5);

    // Ids are a dense index
    for (position, recipe) in book.recipes().iter().enumerate() {
        assert_eq!(recipe.id.get() as usize, position);
    }
}

#[test]
fn test_bundled_index_groups() {
    let book = bundled_book();
    let groups = build_index(book.recipes(), "", None);
    let categories: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(categories, vec!["Mains", "Breakfast", "Desserts", "Soups"]);
    assert_eq!(groups[1].entries.len(), 2);
}

#[test]
fn test_bundled_amounts_scale() {
    let book = bundled_book();
    let jollof = book.get(RecipeId::new(0)).unwrap();

    // 0.33 cup oil for 4 → 6 servings is 0.495
    let oil = &jollof.ingredients[4];
    assert_eq!(render_ingredient(oil, jollof.base_servings, 6).unwrap(), "½ cup vegetable oil");

    // 2.5 cups stock for 4 → 2 servings is 1.25
    let stock = &jollof.ingredients[6];
    assert_eq!(render_ingredient(stock, jollof.base_servings, 2).unwrap(), "1¼ cups chicken stock");
}

#[test]
fn test_bundled_nutrition_text_and_numbers() {
    let book = bundled_book();
    let pho = book.get(RecipeId::new(4)).unwrap();
    assert_eq!(pho.nutrition.calories.to_string(), "520");
    let jollof = book.get(RecipeId::new(0)).unwrap();
    assert_eq!(jollof.nutrition.calories.to_string(), "410");
}
