use crate::domain::model::City;
use crate::domain::ports::AdminApi;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const LOADING_PLACEHOLDER: &str = "در حال بارگذاری...";
pub const SELECT_CITY_PLACEHOLDER: &str = "شهر را انتخاب کنید";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// City select that follows the province select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDropdown {
    options: Vec<SelectOption>,
    disabled: bool,
}

impl Default for CityDropdown {
    fn default() -> Self {
        let mut dropdown = Self {
            options: Vec::new(),
            disabled: true,
        };
        dropdown.clear();
        dropdown
    }
}

impl CityDropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Cities only, without the leading placeholder.
    pub fn cities(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter().filter(|o| !o.value.is_empty())
    }

    pub fn clear(&mut self) {
        self.options = vec![SelectOption::placeholder(LOADING_PLACEHOLDER)];
        self.disabled = true;
    }

    pub fn populate(&mut self, cities: &[City]) {
        self.options.clear();
        self.options
            .push(SelectOption::placeholder(SELECT_CITY_PLACEHOLDER));
        self.options.extend(cities.iter().map(|city| SelectOption {
            value: city.id.to_string(),
            label: city.name.clone(),
        }));
        self.disabled = false;
    }

    /// Refreshes the cities for a newly selected province. A deselected
    /// province or a failed fetch leaves the dropdown cleared.
    pub async fn on_province_change<A: AdminApi + ?Sized>(
        &mut self,
        api: &A,
        province_id: Option<u64>,
    ) -> Result<()> {
        let Some(province_id) = province_id else {
            self.clear();
            return Ok(());
        };

        match api.load_cities(province_id).await {
            Ok(cities) => {
                tracing::debug!(province_id, count = cities.len(), "cities loaded");
                self.populate(&cities);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error loading cities for province {}: {}", province_id, e);
                self.clear();
                Err(e)
            }
        }
    }
}
