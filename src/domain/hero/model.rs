//! Hero domain entity

/// A catalog entry. Built once from the seed and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    /// Path served under `/images`
    pub image: String,
    pub about: String,
    pub rating: f64,
    pub power: u32,
    /// Birth month
    pub month: String,
    /// Birth day
    pub day: String,
    pub family: Vec<String>,
    pub abilities: Vec<String>,
    pub nature_types: Vec<String>,
}

impl Hero {
    /// Case-insensitive substring match on the display name.
    ///
    /// `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(name: &str) -> Hero {
        Hero {
            id: 1,
            name: name.to_string(),
            image: "/images/test.jpg".to_string(),
            about: String::new(),
            rating: 5.0,
            power: 100,
            month: "July".to_string(),
            day: "23rd".to_string(),
            family: vec![],
            abilities: vec![],
            nature_types: vec![],
        }
    }

    #[test]
    fn name_match_ignores_case() {
        let h = hero("Sasuke");
        assert!(h.name_contains("sas"));
        assert!(h.name_contains("uke"));
        assert!(!h.name_contains("naruto"));
    }
}
