use thiserror::Error;

/// Main error type for the Paddock system
#[derive(Error, Debug)]
pub enum PdError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Assignment error: {0}")]
    Assignment(#[from] AssignmentError),

    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Catalog-related errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("row {index} is out of range for the {catalog} catalog ({len} rows)")]
    OutOfRangeIndex {
        catalog: String,
        index: i64,
        len: usize,
    },

    #[error("{catalog} catalog is missing required column {column}")]
    MissingColumn { catalog: String, column: String },

    #[error("{catalog} catalog row {row} has {found} values, expected {expected}")]
    RaggedRow {
        catalog: String,
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("{catalog} catalog has no rows")]
    EmptyCatalog { catalog: String },

    #[error("catalog parsing error: {message}")]
    ParseError { message: String },
}

/// Per-trial assignment errors
#[derive(Error, Debug)]
pub enum AssignmentError {
    #[error("assignment is missing required parameter {name}")]
    MissingParameter { name: String },

    #[error("parameter {name} holds a {found} value, expected {expected}")]
    WrongKind {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("parameter {name} = {value} is outside its declared range [{low}, {high}]")]
    OutOfBounds {
        name: String,
        value: f64,
        low: f64,
        high: f64,
    },

    #[error("parameter {name} choice {value} is outside 0..{cardinality}")]
    ChoiceOutOfRange {
        name: String,
        value: i64,
        cardinality: usize,
    },
}

/// Trial-scoring errors
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("simulation model failed: {message}")]
    ModelFailed { message: String },

    #[error("weight vector has {found} entries, model expects {expected}")]
    WeightMismatch { expected: usize, found: usize },
}

/// Result type alias for Paddock operations
pub type PdResult<T> = Result<T, PdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CatalogError::OutOfRangeIndex {
            catalog: "tires".to_string(),
            index: 7,
            len: 7,
        };

        assert!(error.to_string().contains("tires"));
        assert!(error.to_string().contains("7 rows"));
    }

    #[test]
    fn test_error_conversion() {
        let assignment_error = AssignmentError::MissingParameter {
            name: "hrw".to_string(),
        };
        let pd_error: PdError = assignment_error.into();

        match pd_error {
            PdError::Assignment(_) => (),
            _ => panic!("Expected Assignment error"),
        }
    }

    #[test]
    fn negative_index_is_reported_verbatim() {
        let error = CatalogError::OutOfRangeIndex {
            catalog: "materials".to_string(),
            index: -1,
            len: 13,
        };
        assert!(error.to_string().contains("-1"));
    }
}
