use gloo::net::http::Request;
use shared::{Guest, UpdateGuestRequest};

/// API client for communicating with the guest service.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client issuing same-origin requests.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the full guest directory. Non-2xx responses and transport
    /// failures are both errors; callers degrade to an empty list.
    pub async fn get_guests(&self) -> Result<Vec<Guest>, String> {
        let url = format!("{}/api/get-guests", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Guest>>().await {
                        Ok(guests) => Ok(guests),
                        Err(e) => Err(format!("Failed to parse guests: {}", e)),
                    }
                } else {
                    Err(format!("Server error {}", response.status()))
                }
            }
            Err(e) => Err(format!("Failed to fetch guests: {}", e)),
        }
    }

    /// Build the follow-up submission without sending it. Serialization
    /// failures surface here, before anything reaches the network, so the
    /// caller can still roll back its optimistic state.
    pub fn prepare_update_guest(
        &self,
        request: &UpdateGuestRequest,
    ) -> Result<PendingUpdate, String> {
        let url = format!("{}/api/update-guest", self.base_url);
        let request = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;
        Ok(PendingUpdate { request })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully built update request that has not been dispatched yet.
pub struct PendingUpdate {
    request: Request,
}

impl PendingUpdate {
    /// Dispatch the request. Only transport-level success is observed; the
    /// response body is not inspected.
    pub async fn send(self) -> Result<(), String> {
        self.request
            .send()
            .await
            .map(|_| ())
            .map_err(|e| format!("Network error: {}", e))
    }
}
