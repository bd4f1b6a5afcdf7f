pub const DEFAULT_BATCH_SIZE: usize = 1000;
pub const DEFAULT_GENDER: &str = "female";

const DATASET_BASE: &str = "https://randomuser.me/api/";
const REJECTION_LOG_URL: &str =
    "https://facesmash-6e8a6-default-rtdb.firebaseio.com//facemashapp.json";

/// Remote endpoints the app talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub dataset_url: String,
    pub rejection_log_url: String,
}

impl Endpoints {
    /// Points the dataset request at a batch of `batch_size` profiles filtered
    /// by `gender`, keeping the default rejection log.
    pub fn dataset(batch_size: usize, gender: &str) -> Self {
        Self {
            dataset_url: dataset_url(batch_size, gender),
            rejection_log_url: REJECTION_LOG_URL.to_string(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::dataset(DEFAULT_BATCH_SIZE, DEFAULT_GENDER)
    }
}

fn dataset_url(batch_size: usize, gender: &str) -> String {
    let gender = gender.trim();
    if gender.is_empty() {
        format!("{}?results={}", DATASET_BASE, batch_size)
    } else {
        format!("{}?results={}&gender={}", DATASET_BASE, batch_size, gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.dataset_url,
            "https://randomuser.me/api/?results=1000&gender=female"
        );
        assert_eq!(
            endpoints.rejection_log_url,
            "https://facesmash-6e8a6-default-rtdb.firebaseio.com//facemashapp.json"
        );
    }

    #[test]
    fn blank_gender_drops_filter() {
        let endpoints = Endpoints::dataset(10, "  ");
        assert_eq!(endpoints.dataset_url, "https://randomuser.me/api/?results=10");
    }
}
