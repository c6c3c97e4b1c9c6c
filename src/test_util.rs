//! 测试辅助：安装测试用日志订阅器
//! 默认 debug 级别，可用 RUST_LOG 覆盖；输出交给测试框架捕获

use tracing_subscriber::EnvFilter;

pub(crate) fn init_test_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
