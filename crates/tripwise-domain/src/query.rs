//! Travel query module - the two free-text fields a user submits

use thiserror::Error;

/// Errors raised when a query fails validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Source was empty after trimming
    #[error("Source location is required")]
    MissingSource,

    /// Destination was empty after trimming
    #[error("Destination location is required")]
    MissingDestination,
}

/// A validated (source, destination) pair
///
/// Both fields are trimmed and guaranteed non-empty. Built once per request
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelQuery {
    source: String,
    destination: String,
}

impl TravelQuery {
    /// Create a new query
    ///
    /// # Errors
    /// Returns an error if either field is blank
    pub fn new(source: impl AsRef<str>, destination: impl AsRef<str>) -> Result<Self, QueryError> {
        let source = source.as_ref().trim();
        if source.is_empty() {
            return Err(QueryError::MissingSource);
        }

        let destination = destination.as_ref().trim();
        if destination.is_empty() {
            return Err(QueryError::MissingDestination);
        }

        Ok(Self {
            source: source.to_string(),
            destination: destination.to_string(),
        })
    }

    /// Where the trip starts
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Where the trip ends
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation() {
        let query = TravelQuery::new("Mumbai", "Pune").unwrap();
        assert_eq!(query.source(), "Mumbai");
        assert_eq!(query.destination(), "Pune");
    }

    #[test]
    fn test_query_trims_fields() {
        let query = TravelQuery::new("  New Delhi \n", "\tAgra ").unwrap();
        assert_eq!(query.source(), "New Delhi");
        assert_eq!(query.destination(), "Agra");
    }

    #[test]
    fn test_blank_source_rejected() {
        assert_eq!(TravelQuery::new("   ", "Pune"), Err(QueryError::MissingSource));
        assert_eq!(TravelQuery::new("", ""), Err(QueryError::MissingSource));
    }

    #[test]
    fn test_blank_destination_rejected() {
        assert_eq!(
            TravelQuery::new("Mumbai", " "),
            Err(QueryError::MissingDestination)
        );
    }
}
