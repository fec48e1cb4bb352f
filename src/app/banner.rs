//! Hero banner carousel.
//!
//! The carousel only tracks which banner is showing. Advancing it on a timer
//! is up to the caller, which sends a tick every
//! [`Config::banner_interval_secs`](crate::Config::banner_interval_secs).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub title: String,
    pub subtitle: String,
    /// Call-to-action label.
    pub cta: String,
}

impl Banner {
    fn new(title: &str, subtitle: &str, cta: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            cta: cta.to_string(),
        }
    }
}

/// The storefront's default campaign banners.
#[must_use]
pub fn default_banners() -> Vec<Banner> {
    vec![
        Banner::new("2024 신상 코스튬", "인기 애니메이션 코스프레 의상 대거 입고", "지금 보러가기"),
        Banner::new("WINTER SALE", "전 상품 최대 50% 할인", "할인 상품 보기"),
        Banner::new("원신 코스튬 특가", "풀세트 구매시 위그 무료 증정", "이벤트 참여하기"),
    ]
}

/// Rotating banner selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerCarousel {
    banners: Vec<Banner>,
    current: usize,
}

impl Default for BannerCarousel {
    fn default() -> Self {
        Self::new(default_banners())
    }
}

impl BannerCarousel {
    #[must_use]
    pub const fn new(banners: Vec<Banner>) -> Self {
        Self { banners, current: 0 }
    }

    /// Advances to the next banner, wrapping around. No-op when empty.
    pub fn tick(&mut self) {
        if self.banners.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.banners.len();
    }

    /// Jumps to banner `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.banners.len() {
            return false;
        }
        self.current = index;
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&Banner> {
        self.banners.get(self.current)
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }
}
