use serde::{Deserialize, Serialize};
use crate::models::SiteKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub site: SiteKind,
    pub url: String,

    // Carried through from configuration; nothing compares against it yet.
    #[serde(default, alias = "target")]
    pub target_price: u64,
}

impl Product {
    pub fn new(site: SiteKind, url: impl Into<String>, target_price: u64) -> Self {
        Self {
            site,
            url: url.into(),
            target_price,
        }
    }

    /// Price record key, `"<site>:<url>"`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.site, self.url)
    }
}

/// Products monitored when the config file does not provide its own list.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new(SiteKind::Yodobashi, "https://www.yodobashi.com/product/100000001009241489/", 120_000),
        Product::new(SiteKind::Yodobashi, "https://www.yodobashi.com/product/100000001008502373/", 40_000),
        Product::new(SiteKind::Yodobashi, "https://www.yodobashi.com/product/100000001009158696/", 120_000),
        Product::new(SiteKind::BicCamera, "https://www.biccamera.com/bc/item/14294487/", 120_000),
        Product::new(SiteKind::BicCamera, "https://www.biccamera.com/bc/item/12987157/", 40_000),
        Product::new(SiteKind::BicCamera, "https://www.biccamera.com/bc/item/14152913/", 120_000),
        Product::new(
            SiteKind::Amazon,
            "https://www.amazon.co.jp/Eufy-%E3%83%A6%E3%83%BC%E3%83%95%E3%82%A3-%E3%80%90%E3%83%AD%E3%83%BC%E3%83%A9%E3%83%BC%E3%83%A2%E3%83%83%E3%83%97-%E5%85%A8%E8%87%AA%E5%8B%95%E3%82%AF%E3%83%AA%E3%83%BC%E3%83%8B%E3%83%B3%E3%82%B0%E3%82%B9%E3%83%86%E3%83%BC%E3%82%B7%E3%83%A7%E3%83%B3-%E3%83%A2%E3%83%83%E3%83%97%E6%B4%97%E6%B5%84%E3%83%BB%E4%B9%BE%E7%87%A5/dp/B0F9JGVSDX/",
            120_000,
        ),
        Product::new(
            SiteKind::Amazon,
            "https://www.amazon.co.jp/%E3%83%86%E3%82%A3%E3%83%95%E3%82%A1%E3%83%BC%E3%83%AB-%E9%AB%98%E7%81%AB%E5%8A%9B%EF%BC%93%E6%AC%A1%E5%85%83IH-%E3%81%8A%E7%B1%B3%E3%81%AE%E8%8A%AF%E3%81%BE%E3%81%A7%E4%B8%80%E6%B0%97%E3%81%AB%E7%9B%B4%E7%81%AB%E7%82%8A%E3%81%8D-%E9%81%A0%E8%B5%A4%E5%A4%96%E7%B7%9A3DIH%E7%82%8A%E9%A3%AF%E5%99%A8%E3%80%8D%E3%82%B7%E3%83%AB%E3%83%90%E3%83%BC-RK890EJP/dp/B0D62J5BBL/",
            40_000,
        ),
        Product::new(SiteKind::Amazon, "https://www.amazon.co.jp/gp/product/B0F4K1BSFC/", 120_000),
    ]
}
