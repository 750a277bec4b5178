//! 7-day forecast board assembly.

use tenkimap_weather::{
    extract_percent, format_date, DateContext, FormatError, IconResolver, WeekForecastDay,
};

use crate::html;

/// Assembled board output: the card HTML plus the area name left over from
/// the card loop.
#[derive(Debug, Clone)]
pub struct BoardContent {
    pub html: String,
    /// Area name of the last iterated day. The today popup is titled with
    /// this value, so it reflects day 6 rather than day 0; kept as the page
    /// has always behaved, see the board tests.
    pub last_area_name: String,
}

/// Builds the week card HTML from fetched daily entries.
#[derive(Debug, Clone)]
pub struct ForecastBoard {
    icons: IconResolver,
}

impl ForecastBoard {
    pub fn new(icons: IconResolver) -> Self {
        Self { icons }
    }

    /// Build one card per day, with a header card before day 0.
    ///
    /// Days are processed strictly in sequence: each day's icon probe is
    /// awaited before the next day's begins. Card order in the output is
    /// therefore always the fetched day order; this is a contract, not an
    /// accident, even though it costs one round-trip per day.
    pub async fn build_cards(&self, days: &[WeekForecastDay]) -> Result<BoardContent, FormatError> {
        let mut cards = String::new();
        let mut area_name = String::new();

        for (i, day) in days.iter().enumerate() {
            let data = &day.weather_data;
            area_name = day.area_nm.clone();

            if i == 0 {
                cards.push_str(&html::build_header_card(&day.area_nm, &day.pref_nm));
            }

            let formatted_date = format_date(&data.forecast_date, DateContext::Week)?;
            let precip = extract_percent(&data.precip_chance);
            let reliability = data.reliability.as_deref().unwrap_or("-");

            let icon_html = self
                .icons
                .icon_html(&data.weather_cd, &data.weather_text)
                .await;

            cards.push_str(&html::build_day_card(
                &icon_html,
                &data.weather_text,
                &formatted_date,
                &precip.to_string(),
                &data.max_temp_degree,
                &data.min_temp_degree,
                reliability,
            ));
        }

        Ok(BoardContent {
            html: cards,
            last_area_name: area_name,
        })
    }
}
