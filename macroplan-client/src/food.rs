use serde::{Deserialize, Serialize};

/// Nutrition facts for a single FoodData Central entry, per 100 g.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub fdc_id: u64,
    pub description: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchFood {
    #[serde(default)]
    pub fdc_id: u64,
    pub description: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<SearchNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchNutrient {
    #[serde(default)]
    pub nutrient_name: String,
    #[serde(default)]
    pub value: f64,
}

impl From<SearchFood> for FoodItem {
    fn from(food: SearchFood) -> Self {
        let mut item = FoodItem {
            fdc_id: food.fdc_id,
            description: food.description.unwrap_or_else(|| "Unknown".to_owned()),
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
        };

        for nutrient in food.food_nutrients {
            let name = nutrient.nutrient_name.as_str();
            if name.contains("Energy") {
                item.calories = nutrient.value;
            } else if name == "Protein" {
                item.protein_g = nutrient.value;
            } else if name.contains("Carbohydrate") {
                item.carbs_g = nutrient.value;
            } else if name.contains("Total lipid") || name == "Fat" {
                item.fat_g = nutrient.value;
            }
        }

        item
    }
}

impl SearchResponse {
    pub fn into_items(self, max_results: usize) -> Vec<FoodItem> {
        self.foods
            .into_iter()
            .take(max_results)
            .map(FoodItem::from)
            .collect()
    }
}
