//! 测试辅助工具
//!
//! - 本地桩服务器：模拟 PVGIS 接口，记录收到的请求
//! - 日志捕获：按线程记录日志的级别、目标和内容

use std::cell::RefCell;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// 桩服务器的应答方式
#[derive(Debug, Clone)]
pub enum Reply {
    /// 固定状态码和响应体（按 JSON 返回）
    Fixed(StatusCode, String),
    /// 回显查询字符串: `{"query": "<qs>"}`
    Echo,
    /// 延迟后返回 `{}`
    Slow(Duration),
}

struct StubState {
    reply: Reply,
    seen: Arc<Mutex<Vec<String>>>,
}

/// 正在运行的桩服务器
pub struct Stub {
    /// 形如 `http://127.0.0.1:<port>/api/v5_2`
    pub base_url: String,
    seen: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    /// 已收到请求的 URI（路径 + 查询字符串），按到达顺序
    pub fn requests(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

async fn respond(req: HttpRequest, state: web::Data<StubState>) -> HttpResponse {
    state.seen.lock().unwrap().push(req.uri().to_string());

    match &state.reply {
        Reply::Fixed(status, body) => HttpResponse::build(*status)
            .content_type("application/json")
            .body(body.clone()),
        Reply::Echo => HttpResponse::Ok().json(serde_json::json!({ "query": req.query_string() })),
        Reply::Slow(delay) => {
            actix_web::rt::time::sleep(*delay).await;
            HttpResponse::Ok().json(serde_json::json!({}))
        }
    }
}

/// 在随机端口启动桩服务器（需在 actix 运行时内调用）
pub async fn spawn_stub(reply: Reply) -> Stub {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(StubState {
        reply,
        seen: seen.clone(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .default_service(web::to(respond))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    Stub {
        base_url: format!("http://{}/api/v5_2", addr),
        seen,
    }
}

/// 一个没有进程监听的地址，连接会被拒绝
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/v5_2", addr)
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String, String)>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let entry = (
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        );
        RECORDS.with(|r| r.borrow_mut().push(entry));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// 安装捕获日志器并清空当前线程的记录
pub fn init_log_capture() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// 当前线程中指定级别、目标以 `target_suffix` 结尾的日志内容
pub fn captured(level: Level, target_suffix: &str) -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(l, target, _)| *l == level && target.ends_with(target_suffix))
            .map(|(_, _, message)| message.clone())
            .collect()
    })
}

/// 当前线程捕获到的 PVGIS 错误日志
pub fn captured_errors() -> Vec<String> {
    captured(Level::Error, "services::pvgis")
}
