//! HTML builders for the today popup and the 7-day board cards.
//!
//! Layout and class names follow the page's Bootstrap styling; the builders
//! only produce strings, the `MapSurface` adapter decides where they land.

use tenkimap_weather::{format_date, DateContext, FormatError, TodayForecast};

/// Build the today-popup table for a forecast.
///
/// The remote icon URL is derived from the mapped weather-code name under
/// `image_base_url`; unknown codes and types render as `不明`.
pub fn build_popup_html(
    forecast: &TodayForecast,
    area_name: &str,
    image_base_url: &str,
) -> Result<String, FormatError> {
    let weather_code_str = forecast.icon_code_name();
    let forecast_type_str = forecast.type_label();
    let formatted_date = format_date(&forecast.datetime, DateContext::Today)?;

    Ok(format!(
        r#"<table>
    <tr><td><strong>{area}{forecast_type}</strong></td></tr>
    <tr><td><img src="{base}/{code}.svg" class="today_img" alt="{alt}"></td></tr>
    <tr><td><strong>{text}</strong></td></tr>
    <tr><td>{date}</td></tr>
    <tr><td><b>気温</b> {temp}℃</td></tr>
</table>"#,
        area = area_name,
        forecast_type = forecast_type_str,
        base = image_base_url,
        code = weather_code_str,
        alt = forecast.weather.text,
        text = forecast.weather.text,
        date = formatted_date,
        temp = forecast.temperature.value,
    ))
}

/// Header card shown before day 0: column labels plus the area and
/// prefecture names.
pub fn build_header_card(area_name: &str, pref_name: &str) -> String {
    format!(
        r#"<div class="card text-center">
    <hr class="border border-dark border-2 opacity-50">
    <div class="card-body">
        <h5 class="areaName">{area}</h5>
        <p class="card-text">日付</p>
        <hr class="border border-dark border-2 opacity-50">
        <p class="card-text">降水確率(%)</p>
        <hr class="border border-dark border-2 opacity-50">
        <h5 class="card-title">{pref}</h5>
        <p class="card-text"><span style="color:red;">最高</span> / <span style="color:blue;">最低</span> (℃)</p>
        <hr class="border border-dark border-2 opacity-50">
        <p class="card-text"><small class="text-body-secondary">信頼度</small></p>
    </div>
</div>"#,
        area = area_name,
        pref = pref_name,
    )
}

/// One day card of the week board.
pub fn build_day_card(
    icon_html: &str,
    weather_text: &str,
    formatted_date: &str,
    precip_display: &str,
    max_temp: &str,
    min_temp: &str,
    reliability_display: &str,
) -> String {
    format!(
        r#"<div class="card text-center">
    <hr class="border border-dark border-2 opacity-50">
    {icon}
    <div class="card-body">
        <h5 class="card-title">{text}</h5>
        <p class="card-text">{date}</p>
        <hr class="border border-dark border-2 opacity-50">
        <p class="card-text">{precip}</p>
        <hr class="border border-dark border-2 opacity-50">
        <h5 class="temp"></h5>
        <p class="card-text"><span style="color:red;">{max}</span> / <span style="color:blue;">{min}</span></p>
        <hr class="border border-dark border-2 opacity-50">
        <p class="card-text"><small class="text-body-secondary">{reliability}</small></p>
    </div>
</div>"#,
        icon = icon_html,
        text = weather_text,
        date = formatted_date,
        precip = precip_display,
        max = max_temp,
        min = min_temp,
        reliability = reliability_display,
    )
}
