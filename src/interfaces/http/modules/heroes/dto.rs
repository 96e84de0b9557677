//! Hero DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Hero;
use crate::interfaces::http::common::QueryParams;

/// Hero as sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroDto {
    pub id: u32,
    pub name: String,
    /// Relative image path, served under `/images`
    #[schema(example = "/images/sasuke.jpg")]
    pub image: String,
    pub about: String,
    pub rating: f64,
    pub power: u32,
    pub month: String,
    pub day: String,
    pub family: Vec<String>,
    pub abilities: Vec<String>,
    pub nature_types: Vec<String>,
}

impl From<Hero> for HeroDto {
    fn from(h: Hero) -> Self {
        Self {
            id: h.id,
            name: h.name,
            image: h.image,
            about: h.about,
            rating: h.rating,
            power: h.power,
            month: h.month,
            day: h.day,
            family: h.family,
            abilities: h.abilities,
            nature_types: h.nature_types,
        }
    }
}

/// Query parameters of `GET /boruto/heroes`
///
/// `page` is kept as raw text so that malformed values reach the handler
/// and get the envelope error instead of an extractor rejection. When the
/// parameter is repeated the first value wins.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListHeroesQuery {
    /// Page number (1-based). Default: 1
    pub page: Option<String>,
}

/// Query parameters of `GET /boruto/heroes/search`
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchHeroesQuery {
    /// Case-insensitive name fragment. Empty matches nothing.
    pub name: Option<String>,
}

impl From<QueryParams> for ListHeroesQuery {
    fn from(params: QueryParams) -> Self {
        Self {
            page: params.first("page").map(String::from),
        }
    }
}

impl From<QueryParams> for SearchHeroesQuery {
    fn from(params: QueryParams) -> Self {
        Self {
            name: params.first("name").map(String::from),
        }
    }
}
