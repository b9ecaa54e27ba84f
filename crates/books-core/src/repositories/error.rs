pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of a repository operation, tagged with the phase that failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not connect to storage")]
    Connection(#[source] BoxError),

    #[error("could not look up schema metadata for {object}")]
    MetadataQuery {
        object: String,
        #[source]
        source: BoxError,
    },

    #[error("could not create {object}")]
    SchemaCreation {
        object: String,
        #[source]
        source: BoxError,
    },

    #[error("could not write book listing")]
    Write(#[source] BoxError),

    #[error("could not read book listings")]
    Read(#[source] BoxError),
}

impl Error {
    pub fn connection(source: impl Into<BoxError>) -> Error {
        Error::Connection(source.into())
    }

    pub fn metadata_query(object: impl Into<String>, source: impl Into<BoxError>) -> Error {
        Error::MetadataQuery {
            object: object.into(),
            source: source.into(),
        }
    }

    pub fn schema_creation(object: impl Into<String>, source: impl Into<BoxError>) -> Error {
        Error::SchemaCreation {
            object: object.into(),
            source: source.into(),
        }
    }

    pub fn write(source: impl Into<BoxError>) -> Error {
        Error::Write(source.into())
    }

    pub fn read(source: impl Into<BoxError>) -> Error {
        Error::Read(source.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_names_phase_and_keeps_source() {
        let err = Error::schema_creation("table books.book", "unauthorized");

        assert_eq!(err.to_string(), "could not create table books.book");
        assert_eq!(err.source().unwrap().to_string(), "unauthorized");
    }

    #[test]
    fn test_read_error_source() {
        let err = Error::read(String::from("unconfigured table book"));

        assert!(matches!(err, Error::Read(_)));
        assert_eq!(err.source().unwrap().to_string(), "unconfigured table book");
    }

    #[test]
    fn test_read_error_keeps_typed_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "page cut short");
        let err = Error::read(cause);

        let source = err.source().unwrap();
        let cause = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(cause.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
