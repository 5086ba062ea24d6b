//! 产品目录 API 服务器入口

use catalog_api::{build_app, config::AppConfig, infrastructure::logger::Logger};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("配置加载失败");
    Logger::init(&config.logging.level);

    info!("启动产品目录 API 服务器...");

    let addr = config.addr();
    let app = build_app(&config);

    let listener = TcpListener::bind(&addr).await.expect("无法绑定监听地址");

    info!("🚀 产品目录 API 运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /products      - 获取所有产品");
    info!("   POST   /products      - 创建新产品");
    info!("   GET    /products/:id  - 获取特定产品");
    info!("   PUT    /products/:id  - 整体替换产品");
    info!("   DELETE /products/:id  - 删除产品");
    info!("   GET    /health        - 健康检查");

    axum::serve(listener, app).await.expect("服务器启动失败");
}
