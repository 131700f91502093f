/// `OpenAPI` tag of operational endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag of catalog endpoints.
pub const CATALOG_TAG: &str = "Catalog";

/// File holding the whole engine collection, relative to the content root.
pub const ENGINES_DOCUMENT: &str = "engines";
/// Extension of every content document.
pub const DOCUMENT_EXTENSION: &str = "json";

/// URL prefix under which image assets are served.
pub const IMAGES_ROUTE: &str = "/images";
