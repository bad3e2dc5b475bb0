use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::models::BibleVerse;
use crate::error::{ApiError, FieldError};
use crate::handlers::AppState;

/// GET /api/bible/verse-of-the-day
pub async fn verse_of_the_day(
    State(state): State<AppState>,
) -> Result<Json<BibleVerse>, ApiError> {
    let verse = state
        .storage
        .verse_of_the_day()
        .await?
        .ok_or_else(|| ApiError::not_found("Verse not found"))?;
    Ok(Json(verse))
}

// Raw strings so a bad chapter/verse number yields a per-field 400 instead
// of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct VerseQuery {
    pub book: Option<String>,
    pub chapter: Option<String>,
    pub verse: Option<String>,
}

/// GET /api/bible/verse?book=&chapter=&verse= - 400 before any storage call
/// when the reference is incomplete
pub async fn verse_by_reference(
    State(state): State<AppState>,
    Query(query): Query<VerseQuery>,
) -> Result<Json<BibleVerse>, ApiError> {
    let (book, chapter, verse) = parse_reference(query)
        .map_err(|errors| ApiError::validation("Book, chapter, and verse are required", errors))?;

    let result = state
        .storage
        .verse_by_reference(&book, chapter, verse)
        .await?
        .ok_or_else(|| ApiError::not_found("Verse not found"))?;
    Ok(Json(result))
}

fn parse_reference(query: VerseQuery) -> Result<(String, i32, i32), Vec<FieldError>> {
    let mut errors = Vec::new();

    let book = match query.book {
        Some(book) if !book.trim().is_empty() => Some(book),
        _ => {
            errors.push(FieldError::new("book", "is required"));
            None
        }
    };
    let chapter = parse_number("chapter", query.chapter, &mut errors);
    let verse = parse_number("verse", query.verse, &mut errors);

    match (book, chapter, verse) {
        (Some(book), Some(chapter), Some(verse)) => Ok((book, chapter, verse)),
        _ => Err(errors),
    }
}

fn parse_number(field: &str, value: Option<String>, errors: &mut Vec<FieldError>) -> Option<i32> {
    match value {
        Some(raw) => match raw.parse::<i32>() {
            Ok(n) => Some(n),
            Err(_) => {
                errors.push(FieldError::new(field, "must be a number"));
                None
            }
        },
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_reference_parses() {
        let query = VerseQuery {
            book: Some("Psalms".into()),
            chapter: Some("23".into()),
            verse: Some("1".into()),
        };
        assert_eq!(
            parse_reference(query),
            Ok(("Psalms".to_string(), 23, 1))
        );
    }

    #[test]
    fn each_missing_param_is_named() {
        let errors = parse_reference(VerseQuery::default()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["book", "chapter", "verse"]);
    }

    #[test]
    fn non_numeric_chapter_is_rejected() {
        let query = VerseQuery {
            book: Some("Psalms".into()),
            chapter: Some("twenty-three".into()),
            verse: Some("1".into()),
        };
        let errors = parse_reference(query).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "chapter");
    }
}
