use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::models::{Alert, ChangeType, PriceRecord, Product};
use crate::plugins::notifiers::LineNotifier;
use crate::plugins::traits::{Extraction, Notifier, PageExtractor};
use crate::plugins::ExtractorRegistry;
use crate::scraper::{HttpFetcher, PageSource};
use crate::store::PriceStore;
use crate::utils::error::{AppError, ExtractError};

/// Result of walking the product list once, before anything is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOutcome {
    pub prices: PriceRecord,
    pub alerts: Vec<Alert>,
    pub checked: usize,
    pub failed: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: CheckOutcome,
    pub message: String,
    pub notified: bool,
}

/// One pass over the product list: fetch, diff, save, notify.
pub struct PriceChecker {
    products: Vec<Product>,
    registry: ExtractorRegistry,
    fetcher: Box<dyn PageSource>,
    store: PriceStore,
    notifier: Box<dyn Notifier>,
    request_delay: Duration,
    dry_run: bool,
}

impl PriceChecker {
    pub fn new(
        products: Vec<Product>,
        registry: ExtractorRegistry,
        fetcher: Box<dyn PageSource>,
        store: PriceStore,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            products,
            registry,
            fetcher,
            store,
            notifier,
            request_delay: Duration::ZERO,
            dry_run: false,
        }
    }

    /// Wires the HTTP fetcher, LINE notifier and built-in extractors from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let fetcher = HttpFetcher::new(&config.scraper)?;
        let notifier = LineNotifier::new(config.line.clone())?;

        Ok(Self::new(
            config.products.clone(),
            ExtractorRegistry::with_default_extractors(),
            Box::new(fetcher),
            PriceStore::new(&config.store.path),
            Box::new(notifier),
        )
        .with_request_delay(Duration::from_millis(config.scraper.request_delay_ms)))
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// In a dry run nothing is saved and nothing is sent.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> Result<RunReport, AppError> {
        info!("Checking {} products", self.products.len());

        let previous = self.store.load().await?;
        let outcome = self.check_prices(&previous).await;

        let message = compose_message(&outcome.alerts, Local::now());

        if self.dry_run {
            info!("Dry run: leaving {} untouched and skipping notification", self.store.path().display());
            return Ok(RunReport {
                outcome,
                message,
                notified: false,
            });
        }

        self.store.save(&outcome.prices).await?;
        self.notifier.send(&message).await?;

        info!(
            "Run complete: {} checked, {} failed, {} skipped, {} alerts sent via {}",
            outcome.checked,
            outcome.failed,
            outcome.skipped,
            outcome.alerts.len(),
            self.notifier.name()
        );

        Ok(RunReport {
            outcome,
            message,
            notified: true,
        })
    }

    /// Visits every product in order and diffs it against `previous`.
    ///
    /// Products whose extraction fails get a failure alert and no entry in
    /// the returned prices, even when `previous` had one.
    pub async fn check_prices(&self, previous: &PriceRecord) -> CheckOutcome {
        let mut outcome = CheckOutcome::default();

        for product in &self.products {
            let Some(extractor) = self.registry.get(product.site) else {
                debug!("No extractor for site {}, skipping {}", product.site, product.url);
                outcome.skipped += 1;
                continue;
            };

            match self.check_product(product, extractor).await {
                Ok(Extraction { name, price }) => {
                    let key = product.key();
                    outcome.checked += 1;

                    match previous.get(&key) {
                        Some(previous_price) => match ChangeType::between(previous_price, price) {
                            Some(change) => {
                                info!("{}: {} -> {} ({:?})", name, previous_price, price, change);
                                outcome.alerts.push(Alert::PriceChange {
                                    change,
                                    name,
                                    previous: previous_price,
                                    current: price,
                                    url: product.url.clone(),
                                });
                            }
                            None => debug!("{}: unchanged at {}", name, price),
                        },
                        None => info!("{}: first observation at {}", name, price),
                    }

                    outcome.prices.insert(key, price);
                }
                Err(e) => {
                    warn!("Failed to check {}: {}", product.url, e);
                    outcome.failed += 1;
                    outcome.alerts.push(Alert::FetchFailed {
                        url: product.url.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            if !self.request_delay.is_zero() {
                debug!("Sleeping {:?} before the next product", self.request_delay);
                tokio::time::sleep(self.request_delay).await;
            }
        }

        outcome
    }

    async fn check_product(
        &self,
        product: &Product,
        extractor: &dyn PageExtractor,
    ) -> Result<Extraction, ExtractError> {
        let html = self.fetcher.fetch(&product.url).await?;
        extractor.extract(&html)
    }
}

/// Alerts separated by a blank line, or the heartbeat when there are none.
pub fn compose_message(alerts: &[Alert], now: DateTime<Local>) -> String {
    if alerts.is_empty() {
        return heartbeat_message(now);
    }

    alerts
        .iter()
        .map(|alert| alert.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn heartbeat_message(now: DateTime<Local>) -> String {
    format!("🟢 価格チェック完了\n⏰ {}", now.format("%Y-%m-%d %H:%M:%S"))
}
