//! Search operations over the fetched country enumeration.

use vpndir_common::catalog::Country;
use vpndir_common::error::{CatalogError, Result};

/// The countries the provider operates in, as returned by the catalog.
#[derive(Debug, Clone, Default)]
pub struct CountryList {
    countries: Vec<Country>,
}

impl CountryList {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }

    pub fn into_vec(self) -> Vec<Country> {
        self.countries
    }

    /// The country with the given name, case-insensitive.
    pub fn name(&self, name: &str) -> Result<&Country> {
        let name = name.to_lowercase();
        self.countries
            .iter()
            .find(|country| country.name.to_lowercase() == name)
            .ok_or(CatalogError::CountryNotFound)
    }

    /// The country with the given two-letter code. Codes are all-caps.
    pub fn code(&self, code: &str) -> Result<&Country> {
        self.countries
            .iter()
            .find(|country| country.code == code)
            .ok_or(CatalogError::CountryNotFound)
    }

    /// The country containing a city with the given name, case-insensitive.
    pub fn city_name(&self, name: &str) -> Result<&Country> {
        let name = name.to_lowercase();
        self.countries
            .iter()
            .find(|country| {
                country
                    .cities
                    .iter()
                    .any(|city| city.name.to_lowercase() == name)
            })
            .ok_or(CatalogError::CountryNotFound)
    }

    /// The country containing the city with the given ID.
    pub fn city_id(&self, id: u64) -> Result<&Country> {
        self.countries
            .iter()
            .find(|country| country.cities.iter().any(|city| city.id == id))
            .ok_or(CatalogError::CountryNotFound)
    }
}

impl From<Vec<Country>> for CountryList {
    fn from(countries: Vec<Country>) -> Self {
        CountryList::new(countries)
    }
}
