//! Travel tips assembled from static tables

use crate::profiles::{HotelPreference, TravelTheme};

const THEME_TIP_COUNT: usize = 2;

fn general_tips(destination: &str) -> [String; 3] {
    [
        format!("Best time to visit {}: Check local weather patterns", destination),
        "Download offline maps before your trip".to_string(),
        "Keep emergency contact numbers handy".to_string(),
    ]
}

/// General tips, then tips for the primary theme key (if known), then
/// booking tips for the hotel preference key.
pub fn build_tips(destination: &str, primary_theme: &str, hotel_preference: &str) -> Vec<String> {
    let mut tips: Vec<String> = general_tips(destination).into();

    if let Some(theme) = TravelTheme::from_key(&primary_theme.to_lowercase()) {
        tips.extend(
            theme
                .tips()
                .iter()
                .take(THEME_TIP_COUNT)
                .map(|t| t.to_string()),
        );
    }

    tips.extend(
        HotelPreference::tips_for_key(hotel_preference)
            .iter()
            .map(|t| t.to_string()),
    );

    tips
}
