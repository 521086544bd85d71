use std::fmt;

/// 任务分流客户端的统一错误类型
#[derive(Debug)]
pub enum TriageError {
    /// 用户输入错误（JSON 解析 / 形状校验）
    Input(InputError),
    /// 远端任务服务错误
    Api(ApiError),
    /// 配置错误
    Config(ConfigError),
    /// IO 错误
    Io(std::io::Error),
    /// 其他错误
    Other(String),
}

/// 用户输入错误。
/// 输入错误永远在本地处理，不会触发任何网络请求。
#[derive(Debug)]
pub enum InputError {
    /// 输入为空
    Empty,
    /// 不是合法 JSON
    InvalidJson(String),
    /// 顶层不是数组
    NotAnArray,
    /// 数组元素不是对象（携带 0 起始的下标）
    NotAnObject(usize),
}

/// 远端任务服务错误
#[derive(Debug)]
pub enum ApiError {
    /// 服务返回非成功状态码，message 为响应体中的 `error` 字段
    /// （提取失败时退化为通用提示）
    Http { status: u16, message: String },
    /// 传输层失败，服务不可达
    Network(String),
    /// 响应体格式不符合预期
    InvalidResponse(String),
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置值无效
    InvalidValue { field: String, message: String },
}

impl fmt::Display for TriageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriageError::Input(e) => write!(f, "Input Error: {}", e),
            TriageError::Api(e) => write!(f, "API Error: {}", e),
            TriageError::Config(e) => write!(f, "Config Error: {}", e),
            TriageError::Io(e) => write!(f, "IO Error: {}", e),
            TriageError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => {
                write!(f, "Please enter tasks or add a task using the form.")
            }
            InputError::InvalidJson(msg) => write!(f, "Invalid JSON format: {}", msg),
            InputError::NotAnArray => write!(f, "Tasks must be a JSON array."),
            InputError::NotAnObject(idx) => {
                write!(f, "Task {} is not a JSON object.", idx + 1)
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => {
                write!(f, "{} (status {})", message, status)
            }
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { field, message } => {
                write!(f, "Invalid config value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for TriageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TriageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for InputError {}
impl std::error::Error for ApiError {}
impl std::error::Error for ConfigError {}

impl From<std::io::Error> for TriageError {
    fn from(err: std::io::Error) -> Self {
        TriageError::Io(err)
    }
}

impl From<reqwest::Error> for TriageError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TriageError::Api(ApiError::Network("Request timeout".to_string()))
        } else if err.is_connect() {
            TriageError::Api(ApiError::Network(format!("Connection failed: {}", err)))
        } else {
            TriageError::Api(ApiError::Network(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for TriageError {
    fn from(err: serde_json::Error) -> Self {
        TriageError::Input(InputError::InvalidJson(err.to_string()))
    }
}

impl From<InputError> for TriageError {
    fn from(err: InputError) -> Self {
        TriageError::Input(err)
    }
}

impl From<ApiError> for TriageError {
    fn from(err: ApiError) -> Self {
        TriageError::Api(err)
    }
}

impl From<ConfigError> for TriageError {
    fn from(err: ConfigError) -> Self {
        TriageError::Config(err)
    }
}

// 便捷的 Result 类型别名
pub type Result<T> = std::result::Result<T, TriageError>;
