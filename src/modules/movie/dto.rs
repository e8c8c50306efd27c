use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::model::{Genre, Movie};

fn default_rate() -> f64 {
    5.0
}

/// Full movie schema: everything required except `rate`, which falls back
/// to 5. Unknown extra fields are ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, message = "Movie title must not be empty"))]
    pub title: String,
    #[validate(range(min = 1900, max = 2024, message = "Movie year must be between 1900 and 2024"))]
    pub year: i32,
    pub director: String,
    #[validate(range(min = 1, message = "Movie duration must be a positive number of minutes"))]
    pub duration: i32,
    #[serde(default = "default_rate")]
    #[validate(range(min = 0.0, max = 10.0, message = "Movie rate must be between 0 and 10"))]
    pub rate: f64,
    #[validate(url(message = "Poster must be a valid URL"))]
    pub poster: String,
    #[validate(length(min = 1, message = "Movie genre is required."))]
    pub genre: Vec<Genre>,
}

impl CreateMovieRequest {
    pub fn into_movie(self, id: Uuid) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            rate: self.rate,
            poster: self.poster,
            genre: self.genre,
        }
    }
}

/// Partial movie schema: every field optional, but a present field must
/// still satisfy the same rule as on creation.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, message = "Movie title must not be empty"))]
    pub title: Option<String>,
    #[validate(range(min = 1900, max = 2024, message = "Movie year must be between 1900 and 2024"))]
    pub year: Option<i32>,
    pub director: Option<String>,
    #[validate(range(min = 1, message = "Movie duration must be a positive number of minutes"))]
    pub duration: Option<i32>,
    #[validate(range(min = 0.0, max = 10.0, message = "Movie rate must be between 0 and 10"))]
    pub rate: Option<f64>,
    #[validate(url(message = "Poster must be a valid URL"))]
    pub poster: Option<String>,
    #[validate(length(min = 1, message = "Movie genre is required."))]
    pub genre: Option<Vec<Genre>>,
}

impl UpdateMovieRequest {
    /// Shallow merge: present fields override, absent fields are kept.
    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = &self.director {
            movie.director = director.clone();
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(rate) = self.rate {
            movie.rate = rate;
        }
        if let Some(poster) = &self.poster {
            movie.poster = poster.clone();
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> serde_json::Value {
        serde_json::json!({
            "title": "Dune",
            "year": 2021,
            "director": "Villeneuve",
            "duration": 155,
            "poster": "http://x.com/p.jpg",
            "genre": ["Sci-Fi"]
        })
    }

    #[test]
    fn full_payload_passes_and_rate_defaults() {
        let req: CreateMovieRequest = serde_json::from_value(dune()).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.rate, 5.0);
    }

    #[test]
    fn unknown_extra_fields_are_ignored() {
        let mut payload = dune();
        payload["studio"] = serde_json::json!("Legendary");
        assert!(serde_json::from_value::<CreateMovieRequest>(payload).is_ok());
    }

    #[test]
    fn year_out_of_range_is_reported_on_the_year_field() {
        let mut payload = dune();
        payload["year"] = serde_json::json!(1800);
        let req: CreateMovieRequest = serde_json::from_value(payload).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(
            fields["year"][0].message.as_deref(),
            Some("Movie year must be between 1900 and 2024")
        );
    }

    #[test]
    fn all_failing_fields_are_reported_together() {
        let mut payload = dune();
        payload["title"] = serde_json::json!("");
        payload["year"] = serde_json::json!(2525);
        payload["poster"] = serde_json::json!("not a url");
        let req: CreateMovieRequest = serde_json::from_value(payload).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("year"));
        assert!(fields.contains_key("poster"));
    }

    #[test]
    fn empty_genre_list_is_rejected() {
        let mut payload = dune();
        payload["genre"] = serde_json::json!([]);
        let req: CreateMovieRequest = serde_json::from_value(payload).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("genre"));
    }

    #[test]
    fn genre_outside_the_enum_fails_deserialization() {
        let mut payload = dune();
        payload["genre"] = serde_json::json!(["Sci-Fi", "Soap"]);
        assert!(serde_json::from_value::<CreateMovieRequest>(payload).is_err());
    }

    #[test]
    fn partial_payload_validates_only_present_fields() {
        let req: UpdateMovieRequest =
            serde_json::from_value(serde_json::json!({ "rate": 9.0 })).unwrap();
        assert!(req.validate().is_ok());

        let req: UpdateMovieRequest =
            serde_json::from_value(serde_json::json!({ "rate": 11.0 })).unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("rate"));
    }

    #[test]
    fn empty_partial_payload_is_valid() {
        let req: UpdateMovieRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn merge_overrides_present_fields_and_keeps_the_rest() {
        let full: CreateMovieRequest = serde_json::from_value(dune()).unwrap();
        let mut movie = full.into_movie(Uuid::new_v4());
        let patch: UpdateMovieRequest =
            serde_json::from_value(serde_json::json!({ "year": 2000 })).unwrap();

        patch.apply_to(&mut movie);

        assert_eq!(movie.year, 2000);
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.director, "Villeneuve");
        assert_eq!(movie.duration, 155);
        assert_eq!(movie.genre, vec![Genre::SciFi]);
    }
}
