//! Builtin fly catalog so the CLI works without an external catalog store.

use crate::catalog::{FlyPattern, FlyType, Region};
use crate::conditions::{Season, TimeOfDay, WaterClarity, WaterFlow, WaterLevel, WeatherCondition};

use Season::*;
use TimeOfDay::*;
use WaterClarity::*;
use WeatherCondition::*;

pub fn builtin_patterns() -> Vec<FlyPattern> {
    vec![
        FlyPattern::new("adams-para", "Parachute Adams", FlyType::Dry, 16, "gray")
            .with_description("The universal mayfly dry; fishable almost anywhere duns are up")
            .with_weather(&[Cloudy, Overcast, Sunny])
            .with_clarity(&[Clear, SlightlyMurky])
            .with_flow(&[WaterFlow::Slow, WaterFlow::Moderate])
            .with_time_of_day(&[Morning, Afternoon, Dusk])
            .with_seasons(&[Spring, Summer, Fall])
            .with_hatches(&["mayfly", "baetis", "callibaetis"])
            .with_track_record(0.62, 410),
        FlyPattern::new("bwo-sparkle", "Blue Winged Olive Sparkle Dun", FlyType::Dry, 18, "olive")
            .with_description("Baetis imitation for overcast drizzle days")
            .with_weather(&[Cloudy, Overcast, Rainy])
            .with_clarity(&[Clear, SlightlyMurky])
            .with_flow(&[WaterFlow::Slow, WaterFlow::Moderate])
            .with_time_of_day(&[Morning, Midday, Afternoon])
            .with_seasons(&[EarlySpring, LateSpring, Fall, LateFall])
            .with_temp_range(42.0, 58.0)
            .with_hatches(&["blue winged olive", "baetis", "bwo"])
            .with_track_record(0.58, 260),
        FlyPattern::new("ehc", "Elk Hair Caddis", FlyType::Dry, 14, "tan")
            .with_description("Workhorse caddis dry for riffled water")
            .with_weather(&[Sunny, Cloudy, Overcast])
            .with_clarity(&[Clear, SlightlyMurky])
            .with_flow(&[WaterFlow::Moderate, WaterFlow::Fast])
            .with_time_of_day(&[Afternoon, Dusk])
            .with_seasons(&[LateSpring, Summer, EarlyFall])
            .with_hatches(&["caddis"])
            .with_track_record(0.6, 380),
        FlyPattern::new("pmd-dun", "Pale Morning Dun", FlyType::Dry, 16, "cream")
            .with_description("Summer mayfly staple on western tailwaters")
            .with_weather(&[Sunny, Cloudy])
            .with_clarity(&[Clear])
            .with_flow(&[WaterFlow::Slow, WaterFlow::Moderate])
            .with_time_of_day(&[Morning, Midday])
            .with_seasons(&[EarlySummer, Summer])
            .with_hatches(&["pale morning dun", "pmd"])
            .with_regions(&[Region::MountainWest])
            .with_track_record(0.55, 190),
        FlyPattern::new("rusty-spinner", "Rusty Spinner", FlyType::Dry, 16, "rust brown")
            .with_description("Spent-wing pattern for the evening spinner fall")
            .with_weather(&[Sunny, Cloudy])
            .with_clarity(&[Clear])
            .with_flow(&[WaterFlow::Slow])
            .with_time_of_day(&[Dawn, Dusk])
            .with_seasons(&[Summer, EarlySummer, LateSummer])
            .with_hatches(&["mayfly", "spinner"])
            .with_track_record(0.5, 120),
        FlyPattern::new("stimulator", "Stimulator", FlyType::Dry, 8, "orange")
            .with_description("High-floating attractor dry for stonefly water")
            .with_weather(&[Sunny, Cloudy])
            .with_clarity(&[SlightlyMurky, Murky])
            .with_flow(&[WaterFlow::Moderate, WaterFlow::Fast])
            .with_time_of_day(&[Midday, Afternoon])
            .with_seasons(&[LateSpring, EarlySummer, Summer])
            .with_hatches(&["stonefly", "salmonfly"])
            .with_track_record(0.52, 230),
        FlyPattern::new("pt-nymph", "Pheasant Tail Nymph", FlyType::Nymph, 16, "brown")
            .with_description("Slim mayfly nymph; fish it year round")
            .with_weather(&[Sunny, Cloudy, Overcast, Rainy])
            .with_clarity(&[Clear, SlightlyMurky, Murky])
            .with_level(&[WaterLevel::Low, WaterLevel::Moderate, WaterLevel::High])
            .with_flow(&[WaterFlow::Slow, WaterFlow::Moderate, WaterFlow::Fast])
            .with_time_of_day(&[Dawn, Morning, Midday, Afternoon, Dusk])
            .with_seasons(&[Spring, Summer, Fall, Winter])
            .with_hatches(&["mayfly", "baetis", "pmd"])
            .with_track_record(0.68, 520),
        FlyPattern::new("hares-ear", "Gold Ribbed Hares Ear", FlyType::Nymph, 14, "tan")
            .with_description("Buggy generalist nymph")
            .with_weather(&[Cloudy, Overcast, Rainy])
            .with_clarity(&[SlightlyMurky, Murky])
            .with_level(&[WaterLevel::Moderate, WaterLevel::High])
            .with_flow(&[WaterFlow::Moderate, WaterFlow::Fast])
            .with_time_of_day(&[Morning, Midday, Afternoon])
            .with_seasons(&[Spring, Summer, Fall])
            .with_track_record(0.61, 340),
        FlyPattern::new("zebra-midge", "Zebra Midge", FlyType::Nymph, 22, "black")
            .with_description("Tailwater midge larva; the cold-water default")
            .with_weather(&[Sunny, Cloudy, Overcast])
            .with_clarity(&[Clear])
            .with_level(&[WaterLevel::Low, WaterLevel::Moderate])
            .with_flow(&[WaterFlow::Slow, WaterFlow::Moderate])
            .with_time_of_day(&[Morning, Midday, Afternoon])
            .with_seasons(&[Winter, EarlySpring, LateFall])
            .with_temp_range(34.0, 52.0)
            .with_hatches(&["midge", "chironomid"])
            .with_track_record(0.64, 450),
        FlyPattern::new("copper-john", "Copper John", FlyType::Nymph, 16, "copper")
            .with_description("Heavy attractor nymph that gets down fast")
            .with_weather(&[Rainy, Overcast, Cloudy])
            .with_clarity(&[Murky, SlightlyMurky])
            .with_level(&[WaterLevel::High])
            .with_flow(&[WaterFlow::Fast])
            .with_time_of_day(&[Morning, Midday, Afternoon])
            .with_seasons(&[Spring, Summer])
            .with_track_record(0.57, 280),
        FlyPattern::new("sj-worm", "San Juan Worm", FlyType::Nymph, 14, "pink")
            .with_description("Annelid pattern for high dirty water")
            .with_weather(&[Rainy, Stormy, Overcast])
            .with_clarity(&[Murky, VeryMurky])
            .with_level(&[WaterLevel::High])
            .with_flow(&[WaterFlow::Fast])
            .with_seasons(&[EarlySpring, LateSpring, Winter])
            .with_regions(&[Region::Southwest, Region::MountainWest])
            .with_track_record(0.54, 310),
        FlyPattern::new("chironomid", "Ice Cream Cone Chironomid", FlyType::Nymph, 16, "black")
            .with_description("Stillwater chironomid pupa fished under an indicator")
            .with_weather(&[Cloudy, Overcast, Sunny])
            .with_clarity(&[Clear, SlightlyMurky])
            .with_flow(&[WaterFlow::Slow])
            .with_time_of_day(&[Morning, Midday])
            .with_seasons(&[Spring, EarlySummer, Fall])
            .with_hatches(&["midge", "chironomid"])
            .with_track_record(0.59, 170),
        FlyPattern::new("soft-hackle", "Partridge and Orange Soft Hackle", FlyType::Wet, 14, "orange")
            .with_description("Classic swung wet for caddis and mayfly emergences")
            .with_weather(&[Cloudy, Overcast])
            .with_clarity(&[Clear, SlightlyMurky])
            .with_flow(&[WaterFlow::Moderate])
            .with_time_of_day(&[Afternoon, Dusk])
            .with_seasons(&[Spring, Summer, Fall])
            .with_hatches(&["caddis", "mayfly"])
            .with_track_record(0.51, 140),
        FlyPattern::new("rs2", "RS2 Emerger", FlyType::Emerger, 20, "gray")
            .with_description("Sparse baetis emerger for picky tailwater fish")
            .with_weather(&[Cloudy, Overcast])
            .with_clarity(&[Clear])
            .with_level(&[WaterLevel::Low, WaterLevel::Moderate])
            .with_flow(&[WaterFlow::Slow, WaterFlow::Moderate])
            .with_time_of_day(&[Morning, Midday, Afternoon])
            .with_seasons(&[EarlySpring, Fall, Winter])
            .with_hatches(&["blue winged olive", "baetis", "midge"])
            .with_track_record(0.56, 210),
        FlyPattern::new("bugger-olive", "Woolly Bugger", FlyType::Streamer, 8, "olive")
            .with_description("The streamer that works everywhere something swims")
            .with_weather(&[Cloudy, Overcast, Rainy, Stormy])
            .with_clarity(&[SlightlyMurky, Murky, VeryMurky])
            .with_level(&[WaterLevel::Moderate, WaterLevel::High])
            .with_flow(&[WaterFlow::Moderate, WaterFlow::Fast])
            .with_time_of_day(&[Dawn, Morning, Dusk, Night])
            .with_seasons(&[Spring, Summer, Fall, Winter])
            .with_hatches(&["leech", "sculpin"])
            .with_track_record(0.66, 480),
        FlyPattern::new("sculpzilla", "Sculpzilla Sculpin", FlyType::Streamer, 4, "olive")
            .with_description("Weighted sculpin for pounding banks in big water")
            .with_weather(&[Overcast, Rainy, Stormy])
            .with_clarity(&[Murky, VeryMurky])
            .with_level(&[WaterLevel::High])
            .with_flow(&[WaterFlow::Fast])
            .with_time_of_day(&[Dawn, Dusk, Night])
            .with_seasons(&[Fall, Spring])
            .with_hatches(&["sculpin"])
            .with_regions(&[Region::PacificNorthwest, Region::MountainWest])
            .with_track_record(0.49, 90),
        FlyPattern::new("morrish-mouse", "Morrish Mouse", FlyType::Streamer, 4, "black")
            .with_description("Night-shift surface mouse for predatory browns")
            .with_weather(&[Cloudy, Overcast])
            .with_clarity(&[Clear, SlightlyMurky])
            .with_flow(&[WaterFlow::Slow, WaterFlow::Moderate])
            .with_time_of_day(&[Night, Dusk])
            .with_seasons(&[Summer, EarlyFall])
            .with_track_record(0.42, 60),
        FlyPattern::new("daves-hopper", "Daves Hopper", FlyType::Terrestrial, 10, "yellow")
            .with_description("Grasshopper imitation for breezy summer banks")
            .with_weather(&[Sunny, Cloudy])
            .with_clarity(&[Clear, SlightlyMurky])
            .with_level(&[WaterLevel::Low, WaterLevel::Moderate])
            .with_flow(&[WaterFlow::Slow, WaterFlow::Moderate])
            .with_time_of_day(&[Midday, Afternoon])
            .with_seasons(&[Summer, LateSummer, EarlyFall])
            .with_temp_range(60.0, 78.0)
            .with_hatches(&["hopper", "grasshopper"])
            .with_track_record(0.6, 320),
        FlyPattern::new("black-ant", "Black Flying Ant", FlyType::Terrestrial, 16, "black")
            .with_description("Sinking-in-the-film ant for selective summer fish")
            .with_weather(&[Sunny, Cloudy])
            .with_clarity(&[Clear])
            .with_flow(&[WaterFlow::Slow, WaterFlow::Moderate])
            .with_time_of_day(&[Midday, Afternoon])
            .with_seasons(&[Summer, LateSummer])
            .with_hatches(&["ant"])
            .with_track_record(0.48, 110),
        FlyPattern::new("oct-caddis", "October Caddis", FlyType::Dry, 10, "orange")
            .with_description("Big fall caddis for the last good dry-fly weeks")
            .with_weather(&[Cloudy, Overcast])
            .with_clarity(&[Clear, SlightlyMurky])
            .with_flow(&[WaterFlow::Moderate, WaterFlow::Fast])
            .with_time_of_day(&[Afternoon, Dusk])
            .with_seasons(&[EarlyFall, Fall, LateFall])
            .with_hatches(&["october caddis", "caddis"])
            .with_regions(&[Region::PacificNorthwest])
            .with_track_record(0.5, 130),
    ]
}
