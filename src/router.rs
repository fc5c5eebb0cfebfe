use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/property/:id`
    Detail { id: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page at {0}")]
    NotFound(String),
}

impl Route {
    /// Match a location path against the two pages
    pub fn parse(location: &str) -> Result<Route, RouteError> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        if path.is_empty() {
            return Ok(Route::List);
        }

        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["property", id] if !id.is_empty() => Ok(Route::Detail { id: id.to_string() }),
            _ => Err(RouteError::NotFound(location.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail { id } => format!("/property/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_the_list() {
        assert_eq!(Route::parse("/"), Ok(Route::List));
        assert_eq!(Route::parse(""), Ok(Route::List));
        assert_eq!(Route::parse("/?page=2"), Ok(Route::List));
    }

    #[test]
    fn property_id_is_passed_verbatim() {
        assert_eq!(
            Route::parse("/property/42"),
            Ok(Route::Detail { id: "42".into() })
        );
        assert_eq!(
            Route::parse("/property/abc-9/"),
            Ok(Route::Detail {
                id: "abc-9".into()
            })
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        for path in ["/property", "/property/", "/property/1/rooms", "/stays", "/properties/3"] {
            assert!(Route::parse(path).is_err(), "{path} should not route");
        }
    }

    #[test]
    fn path_round_trips() {
        let route = Route::Detail { id: "7".into() };
        assert_eq!(Route::parse(&route.path()), Ok(route));
    }
}
