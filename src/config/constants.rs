pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DB_NAME: &str = "defect_detective";
pub const ANALYSES_COLLECTION: &str = "analyses";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const SESSION_ID_PREFIX: &str = "defect_analysis_";

pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const API_KEY_HEADER: &str = "x-goog-api-key";
pub const MONGO_URL_ENV: &str = "MONGO_URL";
pub const DB_NAME_ENV: &str = "DB_NAME";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const STORAGE_BACKEND_ENV: &str = "DEFECT_DETECTIVE_STORAGE";

pub const CONFIG_DIR_NAME: &str = "defect-detective";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";
pub const UPLOAD_FIELD_NAME: &str = "file";

pub const CORS_ALLOWED_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"];
pub const CORS_ALLOWED_HEADERS: &[&str] = &[
    "accept",
    "authorization",
    "content-type",
    "origin",
    "x-requested-with",
];

pub const SUPPORTED_IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
];

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
