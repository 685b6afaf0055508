use super::*;
use kakaku_watcher::models::PriceRecord;
use kakaku_watcher::PriceChecker;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_first_run_records_baseline_and_sends_heartbeat() -> anyhow::Result<()> {
    let env = TestEnv::start().await;
    env.serve_page("/yodobashi/1", yodobashi_page("ヘッドホン", "￥5,000")).await;
    env.serve_page("/bic/1", bic_page("電子レンジ", "7,000円")).await;
    env.accept_pushes().await;

    let products = vec![
        env.product(SiteKind::Yodobashi, "/yodobashi/1"),
        env.product(SiteKind::BicCamera, "/bic/1"),
    ];
    let report = PriceChecker::from_config(&env.config(products.clone()))?.run().await?;

    assert!(report.outcome.alerts.is_empty());

    let saved = env.store().load().await?;
    assert_eq!(saved.len(), 2);
    assert_eq!(saved.get(&products[0].key()), Some(5_000));
    assert_eq!(saved.get(&products[1].key()), Some(7_000));

    let pushed = env.pushed_messages().await;
    assert_eq!(pushed.len(), 1);
    assert!(pushed[0].starts_with("🟢 価格チェック完了\n⏰ "));
    Ok(())
}

#[tokio::test]
async fn test_price_drop_is_reported_and_saved() -> anyhow::Result<()> {
    let env = TestEnv::start().await;
    env.serve_page("/bic/u1", bic_page("電子レンジ", "9,500円")).await;
    env.accept_pushes().await;

    let product = env.product(SiteKind::BicCamera, "/bic/u1");
    let mut previous = PriceRecord::new();
    previous.insert(product.key(), 10_000);
    env.store().save(&previous).await?;

    PriceChecker::from_config(&env.config(vec![product.clone()]))?.run().await?;

    let pushed = env.pushed_messages().await;
    assert_eq!(pushed.len(), 1);
    assert!(pushed[0].contains("値下がり"));
    assert!(pushed[0].contains("9,500円"));
    assert!(pushed[0].contains("10,000円"));
    assert!(pushed[0].ends_with(&product.url));

    let saved = env.store().load().await?;
    assert_eq!(saved, [(product.key(), 9_500u64)].into_iter().collect::<PriceRecord>());
    Ok(())
}

#[tokio::test]
async fn test_alerts_keep_product_order() -> anyhow::Result<()> {
    let env = TestEnv::start().await;
    env.serve_page("/amazon/1", amazon_page("炊飯器", "在庫あり。", "￥41,000")).await;
    env.serve_status("/bic/gone", 404).await;
    env.serve_page("/yodobashi/1", yodobashi_page("掃除機", "￥30,000")).await;
    env.accept_pushes().await;

    let products = vec![
        env.product(SiteKind::Amazon, "/amazon/1"),
        env.product(SiteKind::BicCamera, "/bic/gone"),
        env.product(SiteKind::Yodobashi, "/yodobashi/1"),
    ];
    let previous: PriceRecord = [(products[0].key(), 40_000u64), (products[2].key(), 32_000u64)]
        .into_iter()
        .collect();
    env.store().save(&previous).await?;

    PriceChecker::from_config(&env.config(products.clone()))?.run().await?;

    let pushed = env.pushed_messages().await;
    assert_eq!(pushed.len(), 1);

    let sections: Vec<&str> = pushed[0].split("\n\n").collect();
    assert_eq!(sections.len(), 3);
    assert!(sections[0].starts_with("📈 値上がり 検知\n炊飯器\n40,000円 → 41,000円"));
    assert_eq!(sections[1], format!("⚠️ 取得失敗\n{}\nHTTP 404", products[1].url));
    assert!(sections[2].starts_with("📉 値下がり 検知\n掃除機\n32,000円 → 30,000円"));

    let saved = env.store().load().await?;
    let keys: Vec<String> = saved.iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(keys, vec![products[0].key(), products[2].key()]);
    Ok(())
}

#[tokio::test]
async fn test_push_carries_credentials() -> anyhow::Result<()> {
    let env = TestEnv::start().await;
    env.serve_page("/bic/1", bic_page("ケトル", "3,980円")).await;
    Mock::given(method("POST"))
        .and(path(PUSH_PATH))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&env.line)
        .await;

    PriceChecker::from_config(&env.config(vec![env.product(SiteKind::BicCamera, "/bic/1")]))?
        .run()
        .await?;

    let requests = env.line.received_requests().await.unwrap_or_default();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
    assert_eq!(body["to"], TEST_USER);
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(1));
    Ok(())
}
