//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use zonehost_provider::{
    ClientConfig, HttpResponse, HttpTransport, TransportError, ZonehostProvider,
};

pub const TEST_ORIGIN: &str = "https://dns.test/";
pub const TEST_ACCOUNT: &str = "acct";
pub const TEST_SECRET: &str = "s3cret";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// What the mock answers to every request.
#[derive(Clone)]
enum Reply {
    Response(HttpResponse),
    Failure(String),
}

/// Transport that records requested urls and returns a canned reply.
pub struct MockTransport {
    reply: Reply,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn body(body: &str) -> Arc<Self> {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Response(HttpResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(detail: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Failure(detail.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Query string of the only request made.
    pub fn single_query(&self) -> String {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0]
            .split_once('?')
            .map(|(_, q)| q.to_string())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Failure(detail) => Err(TransportError::new(detail.clone())),
        }
    }
}

/// Provider wired to `transport`, pointed at `TEST_ORIGIN`.
pub fn provider_with(transport: Arc<MockTransport>) -> ZonehostProvider {
    let config = ClientConfig::default().with_origin(TEST_ORIGIN).unwrap();
    ZonehostProvider::builder(TEST_ACCOUNT, TEST_SECRET)
        .config(config)
        .transport(transport)
        .build()
        .unwrap()
}

/// Six header lines as returned by the domain listing endpoint.
pub fn domain_header() -> String {
    "hostmaster.example.com\n10800\n3600\n604800\n86400\n*\n".to_string()
}
