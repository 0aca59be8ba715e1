use serde::Deserialize;

use super::{Show, WatchStatus};

/// Filter parameters exactly as they arrive in the query string
///
/// These come from user-controlled, URL-persisted input, so nothing here is
/// validated. Convert with `FilterSpec::from` to get the normalised form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub genre: Option<String>,
    pub streaming_service: Option<String>,
    pub watch_status: Option<String>,
}

impl FilterParams {
    /// Builds parameters from raw query pairs.
    ///
    /// The first value of a repeated key wins and unrelated keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "genre" => &mut params.genre,
                "streamingService" => &mut params.streaming_service,
                "watchStatus" => &mut params.watch_status,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// Constraints applied when listing a profile's shows
///
/// `None` on an axis means no constraint on that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub genre: Option<String>,
    pub streaming_service: Option<String>,
    pub watch_status: Option<WatchStatus>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.streaming_service.is_none() && self.watch_status.is_none()
    }

    /// Whether a show satisfies every constrained axis
    pub fn matches(&self, show: &Show) -> bool {
        self.genre.as_deref().map_or(true, |g| show.has_genre(g))
            && self
                .streaming_service
                .as_deref()
                .map_or(true, |s| show.is_on_service(s))
            && self.watch_status.map_or(true, |w| show.watch_status == w)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<FilterParams> for FilterSpec {
    fn from(params: FilterParams) -> Self {
        // Unknown statuses degrade to "no constraint" instead of rejecting the request
        let watch_status =
            non_empty(params.watch_status).and_then(|raw| match raw.parse::<WatchStatus>() {
                Ok(status) => Some(status),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring watch status filter");
                    None
                }
            });

        Self {
            genre: non_empty(params.genre),
            streaming_service: non_empty(params.streaming_service),
            watch_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(genre: &str, service: &str, status: &str) -> FilterParams {
        let opt = |v: &str| Some(v.to_string());
        FilterParams {
            genre: opt(genre),
            streaming_service: opt(service),
            watch_status: opt(status),
        }
    }

    #[test]
    fn test_empty_strings_impose_no_constraint() {
        let spec = FilterSpec::from(params("", " ", ""));
        assert!(spec.is_empty());
    }

    #[test]
    fn test_unknown_watch_status_is_ignored() {
        let spec = FilterSpec::from(params("Drama", "", "BINGING"));
        assert_eq!(spec.genre.as_deref(), Some("Drama"));
        assert_eq!(spec.watch_status, None);
    }

    #[test]
    fn test_known_values_are_kept() {
        let spec = FilterSpec::from(params("Comedy", "Netflix", "WATCHING"));
        assert_eq!(
            spec,
            FilterSpec {
                genre: Some("Comedy".to_string()),
                streaming_service: Some("Netflix".to_string()),
                watch_status: Some(WatchStatus::Watching),
            }
        );
    }

    #[test]
    fn test_params_deserialize_from_camel_case_query() {
        let parsed: FilterParams =
            serde_json::from_str(r#"{"streamingService":"Hulu","watchStatus":"WATCHED"}"#)
                .unwrap();
        assert_eq!(parsed.streaming_service.as_deref(), Some("Hulu"));
        assert_eq!(parsed.watch_status.as_deref(), Some("WATCHED"));
        assert_eq!(parsed.genre, None);
    }

    #[test]
    fn test_from_pairs_keeps_first_of_repeated_keys() {
        let parsed = FilterParams::from_pairs([
            ("watchStatus", "WATCHED"),
            ("watchStatus", "WATCHING"),
            ("genre", "Drama"),
            ("genre", "Comedy"),
            ("page", "2"),
        ]);
        assert_eq!(parsed.watch_status.as_deref(), Some("WATCHED"));
        assert_eq!(parsed.genre.as_deref(), Some("Drama"));
        assert_eq!(parsed.streaming_service, None);
    }

    #[test]
    fn test_matches_requires_every_axis() {
        let show = Show::new(1, "Archer", WatchStatus::Watching)
            .with_genres(["Comedy", "Animation"])
            .with_streaming_services(["Hulu"]);

        let spec = FilterSpec {
            genre: Some("Comedy".to_string()),
            streaming_service: Some("Hulu".to_string()),
            watch_status: Some(WatchStatus::Watching),
        };
        assert!(spec.matches(&show));

        let wrong_service = FilterSpec {
            streaming_service: Some("Netflix".to_string()),
            ..spec.clone()
        };
        assert!(!wrong_service.matches(&show));
        assert!(FilterSpec::default().matches(&show));
    }
}
