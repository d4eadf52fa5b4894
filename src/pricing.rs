use crate::error::{StrataError, StrataResult};

/// One selectable option (paint, wheels, or an upgrade package).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OptionItem {
    pub id: String,
    pub name: String,
    pub price_usd: i64,
}

/// The configurator's authored option catalog. Prices are validated at
/// authoring time; selection math afterwards is pure arithmetic with no
/// failure modes beyond an unknown id.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    pub base_price_usd: i64,
    pub paints: Vec<OptionItem>,
    pub wheels: Vec<OptionItem>,
    pub packages: Vec<OptionItem>,
}

/// Current selection state: exactly one paint, one wheel set, any packages.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    pub paint: String,
    pub wheels: String,
    pub packages: Vec<String>,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct FinanceTerms {
    pub annual_rate: f64,
    pub term_months: u32,
}

impl Default for FinanceTerms {
    fn default() -> Self {
        Self {
            annual_rate: 0.049,
            term_months: 72,
        }
    }
}

impl FinanceTerms {
    pub fn validate(self) -> StrataResult<()> {
        if !self.annual_rate.is_finite() || self.annual_rate < 0.0 {
            return Err(StrataError::config("annual_rate must be finite and >= 0"));
        }
        if self.term_months == 0 {
            return Err(StrataError::config("term_months must be > 0"));
        }
        Ok(())
    }
}

impl Catalog {
    pub fn validate(&self) -> StrataResult<()> {
        if self.base_price_usd < 0 {
            return Err(StrataError::config("base price must not be negative"));
        }
        for (section, items) in [
            ("paints", &self.paints),
            ("wheels", &self.wheels),
            ("packages", &self.packages),
        ] {
            let mut seen = std::collections::BTreeSet::new();
            for item in items {
                if item.id.trim().is_empty() {
                    return Err(StrataError::config(format!(
                        "{section}: option id must be non-empty"
                    )));
                }
                if item.price_usd < 0 {
                    return Err(StrataError::config(format!(
                        "{section}: option '{}' has a negative price",
                        item.id
                    )));
                }
                if !seen.insert(item.id.as_str()) {
                    return Err(StrataError::config(format!(
                        "{section}: duplicate option id '{}'",
                        item.id
                    )));
                }
            }
        }
        if self.paints.is_empty() || self.wheels.is_empty() {
            return Err(StrataError::config(
                "catalog must offer at least one paint and one wheel set",
            ));
        }
        Ok(())
    }

    pub fn total_price(&self, selection: &Selection) -> StrataResult<i64> {
        let paint = find(&self.paints, "paints", &selection.paint)?;
        let wheels = find(&self.wheels, "wheels", &selection.wheels)?;
        let mut total = self.base_price_usd + paint.price_usd + wheels.price_usd;
        for id in &selection.packages {
            total += find(&self.packages, "packages", id)?.price_usd;
        }
        Ok(total)
    }

    /// Financed monthly price: `round(total * (1 + annual_rate) / term)`.
    pub fn monthly_price(&self, selection: &Selection, terms: FinanceTerms) -> StrataResult<i64> {
        terms.validate()?;
        let total = self.total_price(selection)? as f64;
        Ok((total * (1.0 + terms.annual_rate) / f64::from(terms.term_months)).round() as i64)
    }
}

fn find<'a>(items: &'a [OptionItem], section: &str, id: &str) -> StrataResult<&'a OptionItem> {
    items.iter().find(|i| i.id == id).ok_or_else(|| {
        StrataError::validation(format!("unknown {section} option '{id}'"))
    })
}
