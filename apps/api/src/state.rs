use std::sync::Arc;

use crate::genai::GenerativeModel;
use crate::store::SectionStore;
use crate::uploads::UploadStore;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence seam for the seven section kinds plus registrations.
    pub store: Arc<dyn SectionStore>,
    pub uploads: UploadStore,
    /// Generative model seam. Production: GeminiClient; tests: stub.
    pub model: Arc<dyn GenerativeModel>,
}
