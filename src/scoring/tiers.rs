//! The eight scoring tiers, in descending priority weight.

use crate::astro::{is_in_solunar_period, FeedingActivity, WindowKind};
use crate::catalog::{FlyPattern, FlyType, Region};
use crate::conditions::{
    DataQuality, FishingConditions, HatchIntensity, Season, TimeOfDay, WaterClarity, WaterFlow,
    WaterLevel, WeatherCondition,
};
use crate::scoring::TierScore;

const COLD_WATER_F: f64 = 50.0;
const WARM_WATER_F: f64 = 65.0;
const BREEZY_WIND_MPH: f64 = 8.0;
const STRONG_WIND_MPH: f64 = 15.0;

const RIVER_KEYWORDS: &[&str] = &["river", "creek", "fork", "run", "brook", "stream", "canyon"];
const LAKE_KEYWORDS: &[&str] = &["lake", "pond", "reservoir", "loch", "lagoon", "slough"];

const CURRENT_FLY_KEYWORDS: &[&str] = &["stonefly", "stone", "caddis", "sculpin", "salmonfly"];
const STILLWATER_FLY_KEYWORDS: &[&str] = &[
    "midge",
    "chironomid",
    "leech",
    "damsel",
    "callibaetis",
    "scud",
];
const ATTRACTOR_KEYWORDS: &[&str] = &["royal", "wulff", "humpy", "attractor", "stimulator"];

const NATURAL_COLORS: &[&str] = &["olive", "tan", "brown", "gray", "grey", "cream", "natural", "rust"];
const BRIGHT_COLORS: &[&str] = &[
    "chartreuse",
    "pink",
    "orange",
    "yellow",
    "white",
    "red",
    "gold",
    "copper",
];
const DARK_COLORS: &[&str] = &["black", "purple", "dark"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WaterSource {
    River,
    Lake,
    Unknown,
}

fn detect_water_source(location_name: &str) -> WaterSource {
    let lower = location_name.to_lowercase();
    if RIVER_KEYWORDS.iter().any(|k| lower.contains(k)) {
        WaterSource::River
    } else if LAKE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        WaterSource::Lake
    } else {
        WaterSource::Unknown
    }
}

fn color_in(fly: &FlyPattern, palette: &[&str]) -> bool {
    palette.iter().any(|c| fly.color_has(c))
}

fn name_in(fly: &FlyPattern, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| fly.name_has(k))
}

struct TierBuilder {
    tier: &'static str,
    delta: f64,
    reasons: Vec<String>,
}

impl TierBuilder {
    fn new(tier: &'static str) -> Self {
        Self {
            tier,
            delta: 0.0,
            reasons: Vec::new(),
        }
    }

    fn add(&mut self, delta: f64, reason: impl Into<String>) {
        self.delta += delta;
        self.reasons.push(reason.into());
    }

    fn bump(&mut self, delta: f64) {
        self.delta += delta;
    }

    fn finish(self) -> TierScore {
        TierScore {
            tier: self.tier,
            delta: self.delta,
            reasons: self.reasons,
        }
    }
}

/// Tier 1: water-source type from the location name, plus regional record.
pub fn location_tier(fly: &FlyPattern, conditions: &FishingConditions) -> TierScore {
    let mut b = TierBuilder::new("location");
    match detect_water_source(&conditions.location.name) {
        WaterSource::River => {
            if matches!(
                fly.fly_type,
                FlyType::Nymph | FlyType::Streamer | FlyType::Emerger
            ) {
                b.add(15.0, "Strong choice for moving water");
            }
            if name_in(fly, CURRENT_FLY_KEYWORDS) {
                b.add(8.0, "Imitates insects that thrive in current");
            }
        }
        WaterSource::Lake => {
            if name_in(fly, STILLWATER_FLY_KEYWORDS) {
                b.add(15.0, "Proven stillwater food form");
            }
            if fly.fly_type == FlyType::Streamer {
                b.bump(5.0);
            }
        }
        WaterSource::Unknown => {}
    }

    let region = Region::from_coords(conditions.location.latitude, conditions.location.longitude);
    if fly.best_conditions.regions.contains(&region) {
        b.add(
            10.0,
            format!("Proven producer in the {}", region.label()),
        );
    }
    b.finish()
}

/// Tier 2: weather and light.
pub fn weather_tier(fly: &FlyPattern, conditions: &FishingConditions) -> TierScore {
    let mut b = TierBuilder::new("weather");

    if fly.best_conditions.weather.contains(&conditions.weather) {
        b.add(6.0, "Rated for this weather");
    }

    match conditions.weather {
        WeatherCondition::Sunny => {
            if fly.size >= 16 {
                b.add(8.0, "Small profile for bright-sun scrutiny");
            }
            if color_in(fly, NATURAL_COLORS) {
                b.add(6.0, "Natural tones under bright light");
            }
        }
        WeatherCondition::Overcast | WeatherCondition::Rainy => {
            if fly.size <= 12 {
                b.add(8.0, "Bigger meal for low light");
            }
            if color_in(fly, BRIGHT_COLORS) {
                b.add(6.0, "Bright accents show up in flat light");
            }
        }
        _ => {}
    }

    let wind = conditions.wind_speed_mph;
    if (BREEZY_WIND_MPH..=STRONG_WIND_MPH).contains(&wind) {
        if fly.fly_type == FlyType::Terrestrial {
            b.add(10.0, "Wind drops terrestrials onto the water");
        }
    } else if wind > STRONG_WIND_MPH {
        if fly.fly_type == FlyType::Terrestrial {
            b.add(6.0, "Heavy wind still moves terrestrials");
        }
        if fly.fly_type == FlyType::Dry {
            b.add(-8.0, "Hard to float a dry in strong wind");
        }
    }

    match conditions.time_of_day {
        TimeOfDay::Dawn | TimeOfDay::Dusk => {
            if fly.name_has("spinner") {
                b.add(8.0, "Spinner falls concentrate at dawn and dusk");
            }
            if fly.fly_type == FlyType::Dry && fly.size <= 12 {
                b.add(6.0, "Large dries draw low-light risers");
            }
        }
        TimeOfDay::Night => {
            if fly.name_has("mouse") {
                b.add(12.0, "Mouse patterns own the night shift");
            }
            if fly.fly_type == FlyType::Streamer && color_in(fly, DARK_COLORS) {
                b.add(10.0, "Dark silhouette shows against the night sky");
            }
            if fly.fly_type == FlyType::Dry {
                b.add(-12.0, "Dry flies go unseen after dark");
            }
        }
        _ => {}
    }

    if fly
        .best_conditions
        .time_of_day
        .contains(&conditions.time_of_day)
    {
        b.add(4.0, "Rated for this time of day");
    }

    b.finish()
}

/// Tier 3: water clarity, flow, temperature, and level.
pub fn water_tier(fly: &FlyPattern, conditions: &FishingConditions) -> TierScore {
    let mut b = TierBuilder::new("water");

    match conditions.water_clarity {
        WaterClarity::Clear => {
            if color_in(fly, NATURAL_COLORS) {
                b.add(7.0, "Natural colors for clear water");
            }
            if fly.size >= 18 {
                b.add(6.0, "Fine profile for clear-water inspection");
            }
        }
        WaterClarity::Murky | WaterClarity::VeryMurky => {
            if color_in(fly, BRIGHT_COLORS) {
                b.add(8.0, "Bright colors cut through murk");
            }
            if fly.size <= 10 {
                b.add(7.0, "Large profile pushes water fish can feel");
            }
        }
        WaterClarity::SlightlyMurky => {}
    }
    if fly
        .best_conditions
        .water_clarity
        .contains(&conditions.water_clarity)
    {
        b.add(4.0, "Rated for this clarity");
    }

    match conditions.water_flow {
        WaterFlow::Fast => {
            if matches!(fly.fly_type, FlyType::Nymph | FlyType::Streamer) {
                b.add(8.0, "Gets down in fast current");
            }
            if name_in(fly, &["bead", "tungsten", "weighted", "copper"]) {
                b.add(5.0, "Weighted to hold the strike zone");
            }
            if fly.fly_type == FlyType::Dry {
                b.add(-6.0, "Fast water drowns dry flies");
            }
        }
        WaterFlow::Slow => {
            if matches!(fly.fly_type, FlyType::Dry | FlyType::Emerger) {
                b.add(6.0, "Slow water favors surface and film patterns");
            }
        }
        WaterFlow::Moderate => {}
    }
    if fly
        .best_conditions
        .water_flow
        .contains(&conditions.water_flow)
    {
        b.add(4.0, "Rated for this flow");
    }

    if let Some(temp) = conditions.water_temperature_f {
        if temp < COLD_WATER_F {
            if name_in(fly, &["midge", "worm", "zebra"]) {
                b.add(9.0, "Cold water means midges and worms");
            }
            if fly.fly_type == FlyType::Dry && fly.size <= 12 {
                b.add(-6.0, "Large dries sit idle in cold water");
            }
        } else if temp > WARM_WATER_F {
            if fly.fly_type == FlyType::Terrestrial {
                b.add(8.0, "Warm banks put terrestrials in play");
            }
            if fly.fly_type == FlyType::Dry {
                b.add(5.0, "Warm water brings fish to the surface");
            }
        }
        if let Some(range) = &fly.best_conditions.water_temp_range {
            if (range.min_f..=range.max_f).contains(&temp) {
                b.add(5.0, "Water temperature inside the fly's rated range");
            }
        }
    }

    match conditions.water_level {
        WaterLevel::High => {
            if fly.size <= 10 {
                b.add(5.0, "High water calls for a bigger target");
            }
            if fly.fly_type == FlyType::Streamer {
                b.add(5.0, "Streamers hunt displaced fish in high water");
            }
        }
        WaterLevel::Low => {
            if fly.fly_type == FlyType::Dry && fly.size >= 16 {
                b.add(5.0, "Low water rewards a delicate dry");
            }
            if fly.fly_type == FlyType::Nymph && fly.size >= 16 {
                b.add(4.0, "Small nymphs for skinny water");
            }
        }
        WaterLevel::Moderate => {}
    }
    if fly
        .best_conditions
        .water_level
        .contains(&conditions.water_level)
    {
        b.add(3.0, "Rated for this water level");
    }

    if let Some(water) = &conditions.live_water {
        if water.quality == DataQuality::Live {
            b.add(3.0, "Conditions confirmed by a live gauge");
        }
    }

    b.finish()
}

/// Tier 4: seasonal hatch calendars plus the request's active-hatch list.
pub fn season_tier(fly: &FlyPattern, conditions: &FishingConditions) -> TierScore {
    let mut b = TierBuilder::new("season");
    let season = conditions.time_of_year;

    if season.is_spring() {
        if name_in(fly, &["blue winged olive", "bwo", "baetis", "stonefly", "skwala", "caddis"]) {
            b.add(8.0, "Spring hatch calendar favorite");
        }
    } else if season.is_summer() {
        if name_in(fly, &["pale morning dun", "pmd", "caddis", "hopper", "ant", "beetle"]) {
            b.add(8.0, "Summer hatch calendar favorite");
        }
        if fly.fly_type == FlyType::Terrestrial {
            b.add(6.0, "Peak terrestrial season");
        }
    } else if season.is_fall() {
        if name_in(fly, &["october caddis", "midge", "bwo", "baetis"]) {
            b.add(8.0, "Fall hatch calendar favorite");
        }
        if fly.fly_type == FlyType::Streamer {
            b.add(6.0, "Pre-spawn fish chase streamers in fall");
        }
    } else {
        // Winter.
        if name_in(fly, &["midge", "worm", "zebra"]) {
            b.add(9.0, "Winter fish live on midges and worms");
        }
        if fly.fly_type == FlyType::Dry {
            b.add(-6.0, "Few winter fish look up");
        }
    }

    if fly
        .best_conditions
        .time_of_year
        .iter()
        .any(|declared| season.matches(*declared))
    {
        b.add(5.0, "Rated for this season");
    }

    for hatch in &conditions.active_hatches {
        let insect = hatch.insect.to_lowercase();
        let matched = fly.name_has(&insect)
            || fly
                .best_conditions
                .hatch_matches
                .iter()
                .any(|m| m.to_lowercase() == insect || insect.contains(&m.to_lowercase()));
        if matched {
            let factor = match hatch.intensity {
                HatchIntensity::Sparse => 1.0,
                HatchIntensity::Moderate => 1.5,
                HatchIntensity::Heavy => 2.0,
            };
            b.add(6.0 * factor, format!("Matches the active {} hatch", hatch.insect));
        }
    }

    b.finish()
}

/// Tier 5: lunar feeding activity and solunar window containment at the
/// evaluation instant.
pub fn lunar_tier(fly: &FlyPattern, conditions: &FishingConditions) -> TierScore {
    let mut b = TierBuilder::new("lunar");

    let activity = conditions
        .moon
        .as_ref()
        .map(|m| m.feeding_activity)
        .unwrap_or(FeedingActivity::Moderate);
    match activity {
        FeedingActivity::VeryHigh => b.add(8.0, "Peak lunar feeding activity"),
        FeedingActivity::High => b.add(5.0, "Elevated lunar feeding activity"),
        FeedingActivity::Moderate => b.bump(2.0),
        FeedingActivity::Low => {}
    }

    if let Some(periods) = &conditions.solunar {
        let status = is_in_solunar_period(periods, conditions.date);
        match status.kind {
            Some(WindowKind::Major) => {
                let remaining = status.minutes_remaining.unwrap_or(0);
                b.add(
                    6.0,
                    format!("Inside a major solunar window ({remaining} min left)"),
                );
            }
            Some(WindowKind::Minor) => {
                b.add(3.0, "Inside a minor solunar window");
            }
            None => {}
        }
    }

    if conditions.time_of_day == TimeOfDay::Night
        && activity >= FeedingActivity::High
        && (fly.name_has("mouse") || fly.fly_type == FlyType::Streamer)
    {
        b.add(6.0, "Bright-night predators hunt big profiles");
    }

    b.finish()
}

/// Tier 6: versatility breadth, per-type base bonus, and matched-dimension
/// count. The base bonus keeps type distribution sane across the catalog.
pub fn versatility_tier(fly: &FlyPattern, conditions: &FishingConditions) -> TierScore {
    let mut b = TierBuilder::new("versatility");

    let bc = &fly.best_conditions;
    let broad_lists = [
        bc.weather.len(),
        bc.time_of_day.len(),
        bc.time_of_year.len(),
        bc.water_clarity.len(),
    ]
    .iter()
    .filter(|len| **len >= 3)
    .count();
    if broad_lists > 0 {
        b.bump(1.5 * broad_lists as f64);
        if broad_lists >= 2 {
            b.reasons.push("Versatile across many conditions".to_string());
        }
    }

    let type_base = match fly.fly_type {
        FlyType::Nymph => 4.0,
        FlyType::Emerger => 3.0,
        FlyType::Dry => 2.5,
        FlyType::Wet => 2.0,
        FlyType::Streamer => 2.0,
        FlyType::Terrestrial => 1.5,
    };
    b.bump(type_base);

    let mut matched = 0usize;
    if bc.weather.contains(&conditions.weather) {
        matched += 1;
    }
    if bc.water_clarity.contains(&conditions.water_clarity) {
        matched += 1;
    }
    if bc.water_level.contains(&conditions.water_level) {
        matched += 1;
    }
    if bc.water_flow.contains(&conditions.water_flow) {
        matched += 1;
    }
    if bc.time_of_day.contains(&conditions.time_of_day) {
        matched += 1;
    }
    if bc
        .time_of_year
        .iter()
        .any(|declared| conditions.time_of_year.matches(*declared))
    {
        matched += 1;
    }
    if matched > 0 {
        b.add(
            1.5 * matched as f64,
            format!("Matches {matched} of today's condition dimensions"),
        );
    }

    b.finish()
}

/// Tier 7: deterministic uniqueness jitter. A hash of coordinates plus fly
/// identity, bounded to ±10, so nearby-but-distinct locations don't produce
/// identical top lists. Not an RNG: same inputs, same jitter.
pub fn uniqueness_tier(fly: &FlyPattern, conditions: &FishingConditions) -> TierScore {
    let mut b = TierBuilder::new("uniqueness");

    let seed = format!(
        "{:.4}:{:.4}:{}",
        conditions.location.latitude, conditions.location.longitude, fly.id
    );
    let jitter = (fnv1a(seed.as_bytes()) % 2001) as f64 / 100.0 - 10.0;
    b.bump(jitter);

    match detect_water_source(&conditions.location.name) {
        WaterSource::River if name_in(fly, CURRENT_FLY_KEYWORDS) => {
            b.bump(2.0);
        }
        WaterSource::Lake if name_in(fly, STILLWATER_FLY_KEYWORDS) => {
            b.bump(2.0);
        }
        _ => {}
    }

    // Coarse elevation proxy: mountain-west coordinates lean on attractors.
    let region = Region::from_coords(conditions.location.latitude, conditions.location.longitude);
    if region == Region::MountainWest && name_in(fly, ATTRACTOR_KEYWORDS) {
        b.add(2.0, "High-country water eats attractor patterns");
    }

    b.finish()
}

/// Tier 8: live-reading bonuses on top of the categorical water tier.
pub fn realtime_tier(fly: &FlyPattern, conditions: &FishingConditions) -> TierScore {
    let mut b = TierBuilder::new("realtime");
    let Some(water) = &conditions.live_water else {
        return b.finish();
    };

    if water.quality == DataQuality::Live {
        b.add(5.0, "Backed by live gauge data");
    }

    if let Some(temp) = water.temperature_f {
        if temp < COLD_WATER_F && (name_in(fly, &["midge", "worm", "zebra"]) || fly.fly_type == FlyType::Nymph)
        {
            b.add(4.0, "Gauge shows cold water; subsurface food rules");
        } else if temp > WARM_WATER_F && fly.fly_type == FlyType::Terrestrial {
            b.add(4.0, "Gauge shows warm water; banks are alive");
        }
    }

    if let Some(flow) = water.flow_cfs {
        if flow > 1_000.0 && fly.fly_type == FlyType::Streamer {
            b.add(4.0, "Heavy flow reading favors streamers");
        } else if flow < 100.0 && fly.fly_type == FlyType::Dry {
            b.add(3.0, "Thin flow reading favors the surface game");
        }
    }

    b.finish()
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::conditions::normalize::complete;
    use crate::conditions::{
        ConditionInput, HatchActivity, HatchStage, Location, WeatherCondition,
    };

    use super::*;

    fn base_conditions(location: Location) -> FishingConditions {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 15, 0, 0).unwrap();
        complete(&ConditionInput::default(), location, now)
    }

    #[test]
    fn river_rewards_subsurface_types() {
        let conditions = base_conditions(Location::new("Gallatin River", 45.3, -111.2));
        let nymph = FlyPattern::new("n", "Hares Ear", FlyType::Nymph, 14, "tan");
        let dry = FlyPattern::new("d", "Adams", FlyType::Dry, 14, "gray");
        assert!(location_tier(&nymph, &conditions).delta > location_tier(&dry, &conditions).delta);
    }

    #[test]
    fn lake_rewards_stillwater_names() {
        let conditions = base_conditions(Location::new("Hebgen Lake", 44.8, -111.2));
        let chiro = FlyPattern::new("c", "Ice Cream Cone Chironomid", FlyType::Nymph, 16, "black");
        let stone = FlyPattern::new("s", "Pats Rubber Legs Stonefly", FlyType::Nymph, 8, "brown");
        assert!(location_tier(&chiro, &conditions).delta > location_tier(&stone, &conditions).delta);
    }

    #[test]
    fn regional_record_earns_bonus() {
        let conditions = base_conditions(Location::new("Madison River", 44.9, -111.5));
        let regional = FlyPattern::new("r", "Local Special", FlyType::Nymph, 14, "olive")
            .with_regions(&[Region::MountainWest]);
        let generic = FlyPattern::new("g", "Local Special", FlyType::Nymph, 14, "olive");
        let delta =
            location_tier(&regional, &conditions).delta - location_tier(&generic, &conditions).delta;
        assert!((delta - 10.0).abs() < 1e-9);
    }

    #[test]
    fn wind_band_rewards_terrestrials() {
        let mut conditions = base_conditions(Location::new("Madison River", 44.9, -111.5));
        conditions.wind_speed_mph = 12.0;
        let hopper = FlyPattern::new("h", "Daves Hopper", FlyType::Terrestrial, 10, "yellow");
        let tier = weather_tier(&hopper, &conditions);
        assert!(tier.delta > 0.0);
        assert!(tier.reasons.iter().any(|r| r.contains("Wind")));
    }

    #[test]
    fn strong_wind_penalizes_dries() {
        let mut conditions = base_conditions(Location::new("Madison River", 44.9, -111.5));
        conditions.wind_speed_mph = 22.0;
        conditions.weather = WeatherCondition::Foggy; // isolate the wind term
        let dry = FlyPattern::new("d", "Green Drake", FlyType::Dry, 10, "olive");
        assert!(weather_tier(&dry, &conditions).delta < 0.0);
    }

    #[test]
    fn night_flips_dry_and_mouse() {
        let mut conditions = base_conditions(Location::new("Madison River", 44.9, -111.5));
        conditions.time_of_day = TimeOfDay::Night;
        let mouse = FlyPattern::new("m", "Morrish Mouse", FlyType::Streamer, 4, "black");
        let dry = FlyPattern::new("d", "Adams", FlyType::Dry, 14, "gray");
        assert!(weather_tier(&mouse, &conditions).delta > 0.0);
        assert!(weather_tier(&dry, &conditions).delta < 0.0);
    }

    #[test]
    fn cold_water_midge_bonus_and_dry_penalty() {
        let mut conditions = base_conditions(Location::new("Bighorn River", 45.1, -107.9));
        conditions.water_temperature_f = Some(42.0);
        let midge = FlyPattern::new("z", "Zebra Midge", FlyType::Nymph, 22, "black");
        let big_dry = FlyPattern::new("s", "Chubby Chernobyl", FlyType::Dry, 8, "purple");
        let midge_tier = water_tier(&midge, &conditions);
        let dry_tier = water_tier(&big_dry, &conditions);
        assert!(midge_tier.delta > dry_tier.delta);
        assert!(midge_tier
            .reasons
            .iter()
            .any(|r| r.contains("Cold water")));
    }

    #[test]
    fn active_hatch_scales_with_intensity() {
        let mut conditions = base_conditions(Location::new("Henrys Fork", 44.1, -111.4));
        let caddis = FlyPattern::new("e", "Elk Hair Caddis", FlyType::Dry, 14, "tan")
            .with_hatches(&["caddis"]);
        conditions.active_hatches = vec![HatchActivity {
            insect: "caddis".to_string(),
            stage: HatchStage::Adult,
            intensity: HatchIntensity::Sparse,
        }];
        let sparse = season_tier(&caddis, &conditions).delta;
        conditions.active_hatches[0].intensity = HatchIntensity::Heavy;
        let heavy = season_tier(&caddis, &conditions).delta;
        assert!((heavy - sparse - 6.0).abs() < 1e-9);
    }

    #[test]
    fn winter_penalizes_dries() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 18, 0, 0).unwrap();
        let conditions = complete(
            &ConditionInput::default(),
            Location::new("San Juan River", 36.8, -107.7),
            now,
        );
        let dry = FlyPattern::new("d", "Royal Wulff", FlyType::Dry, 12, "red");
        assert!(season_tier(&dry, &conditions).delta < 0.0);
    }

    #[test]
    fn jitter_is_deterministic_and_bounded() {
        let conditions = base_conditions(Location::new("Madison River", 44.9, -111.5));
        let fly = FlyPattern::new("pt", "Pheasant Tail", FlyType::Nymph, 16, "brown");
        let a = uniqueness_tier(&fly, &conditions).delta;
        let b = uniqueness_tier(&fly, &conditions).delta;
        assert_eq!(a, b);
        assert!(a.abs() <= 12.1); // jitter ±10 plus keyword alignments
    }

    #[test]
    fn jitter_varies_with_location() {
        let here = base_conditions(Location::new("Madison River", 44.9, -111.5));
        let there = base_conditions(Location::new("Madison River", 44.9001, -111.5002));
        let fly = FlyPattern::new("pt", "Pheasant Tail", FlyType::Nymph, 16, "brown");
        assert_ne!(
            uniqueness_tier(&fly, &here).delta,
            uniqueness_tier(&fly, &there).delta
        );
    }

    #[test]
    fn realtime_tier_needs_a_live_reading() {
        let conditions = base_conditions(Location::new("Madison River", 44.9, -111.5));
        let fly = FlyPattern::new("b", "Woolly Bugger", FlyType::Streamer, 8, "olive");
        assert_eq!(realtime_tier(&fly, &conditions).delta, 0.0);
    }

    #[test]
    fn heavy_live_flow_favors_streamers() {
        use crate::conditions::WaterSnapshot;
        let mut conditions = base_conditions(Location::new("Yellowstone River", 45.6, -110.6));
        conditions.live_water = Some(WaterSnapshot {
            temperature_f: Some(55.0),
            flow_cfs: Some(4_200.0),
            gauge_height_ft: Some(6.5),
            quality: DataQuality::Live,
            source: "usgs".to_string(),
            station_id: None,
            observed_at: None,
        });
        let streamer = FlyPattern::new("b", "Woolly Bugger", FlyType::Streamer, 8, "olive");
        let tier = realtime_tier(&streamer, &conditions);
        assert!((tier.delta - 9.0).abs() < 1e-9); // live bonus + heavy-flow bonus
    }
}
