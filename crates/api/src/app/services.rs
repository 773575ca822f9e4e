use std::sync::Arc;

use catalogd_store::ProductStore;

/// Service handles shared by all request handlers.
///
/// Holds the product store behind its trait so the HTTP layer never knows
/// which backend is wired in. No per-request state lives here.
pub struct AppServices {
    products: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &dyn ProductStore {
        self.products.as_ref()
    }
}
