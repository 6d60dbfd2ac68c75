//! Compiled-in catalog declarations

use super::types::{CatalogDeclaration, CatalogEntry, Category, EntryName};

/// Vanguard strike playlist carrying the daily modifiers
pub const VANGUARD_STRIKES_HASH: u64 = 2_394_616_003;

/// Vault of Glass instance flagged with the weekly challenge
pub const VAULT_OF_GLASS_CHALLENGE_HASH: u64 = 1_485_585_878;

const fn daily(activity_type: &'static str, name: &'static str, image: &'static str) -> CatalogEntry {
    CatalogEntry {
        category: Category::Today,
        activity_type,
        name: EntryName::Fixed(name),
        image_url_template: image,
        wants_modifier_detail: true,
    }
}

const fn weekly(activity_type: &'static str, name: &'static str, image: &'static str) -> CatalogEntry {
    CatalogEntry {
        category: Category::ThisWeek,
        activity_type,
        name: EntryName::Fixed(name),
        image_url_template: image,
        wants_modifier_detail: false,
    }
}

const fn challenge(activity_type: &'static str, image: &'static str) -> CatalogEntry {
    CatalogEntry {
        category: Category::ThisWeek,
        activity_type,
        name: EntryName::FromModifiers,
        image_url_template: image,
        wants_modifier_detail: false,
    }
}

macro_rules! pgcr {
    ($file:literal) => {
        concat!("/img/destiny_content/pgcr/", $file)
    };
}

pub const DECLARATIONS: &[CatalogDeclaration] = &[
    // Today
    CatalogDeclaration {
        id: "vanguard-strikes",
        hashes: &[VANGUARD_STRIKES_HASH, 4_252_456_044, 2_633_209_839],
        entry: daily("Daily Modifiers", "Vanguard Strikes", pgcr!("strike_vanguard_ops.jpg")),
    },
    // Nightfall: The Ordeal, one declaration per strike covering every tier
    CatalogDeclaration {
        id: "nightfall-glassway",
        hashes: &[1_096_329_108, 3_542_082_931, 3_542_082_928, 3_542_082_929, 3_542_082_930],
        entry: weekly("Nightfall", "The Glassway", pgcr!("vex_glassway.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-arms-dealer",
        hashes: &[1_753_547_897, 3_145_298_904, 3_145_298_907, 3_145_298_906, 3_145_298_905],
        entry: weekly("Nightfall", "The Arms Dealer", pgcr!("strike_the_arms_dealer.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-lake-of-shadows",
        hashes: &[2_136_320_298, 3_372_160_277, 3_372_160_276, 3_372_160_279, 3_372_160_278],
        entry: weekly("Nightfall", "Lake of Shadows", pgcr!("strike_lake_of_shadows.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-proving-grounds",
        hashes: &[2_103_025_315, 1_437_935_813, 1_437_935_812, 1_437_935_815, 1_437_935_814],
        entry: weekly("Nightfall", "Proving Grounds", pgcr!("nessus_proving_grounds.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-insight-terminus",
        hashes: &[3_751_421_841, 2_182_919_917, 2_182_919_916, 2_182_919_919, 2_182_919_918],
        entry: weekly("Nightfall", "The Insight Terminus", pgcr!("strike_insight_terminus.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-exodus-crash",
        hashes: &[1_549_614_516, 2_598_372_743, 2_598_372_742, 2_598_372_741, 2_598_372_740],
        entry: weekly("Nightfall", "Exodus Crash", pgcr!("strike_exodus_crash.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-disgraced",
        hashes: &[1_684_420_962, 1_561_304_131, 1_561_304_130, 1_561_304_129, 1_561_304_128],
        entry: weekly("Nightfall", "The Disgraced", pgcr!("strike_the_disgraced.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-fallen-saber",
        hashes: &[3_597_372_938, 1_005_137_262, 1_005_137_263, 1_005_137_260, 1_005_137_261],
        entry: weekly("Nightfall", "Fallen S.A.B.E.R.", pgcr!("strike_fallen_saber.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-devils-lair",
        hashes: &[969_982_762, 2_777_041_980, 2_777_041_981, 2_777_041_982, 2_777_041_983],
        entry: weekly("Nightfall", "The Devils' Lair", pgcr!("strike_the_devils_lair.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-warden-of-nothing",
        hashes: &[1_360_385_764, 2_610_778_214, 2_610_778_215, 2_610_778_212, 2_610_778_213],
        entry: weekly("Nightfall", "Warden of Nothing", pgcr!("strike_warden_of_nothing.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-inverted-spire",
        hashes: &[3_050_465_729, 1_207_505_828, 1_207_505_829, 1_207_505_830, 1_207_505_831],
        entry: weekly("Nightfall", "The Inverted Spire", pgcr!("strike_inverted_spire.jpg")),
    },
    CatalogDeclaration {
        id: "nightfall-scarlet-keep",
        hashes: &[346_345_236, 3_939_210_021, 3_939_210_020, 3_939_210_023, 3_939_210_022],
        entry: weekly("Nightfall", "The Scarlet Keep", pgcr!("strike_the_scarlet_keep.jpg")),
    },
    // Raid challenges: the challenge name arrives as a modifier
    CatalogDeclaration {
        id: "raid-vault-of-glass",
        hashes: &[VAULT_OF_GLASS_CHALLENGE_HASH, 1_681_562_271],
        entry: challenge("Vault of Glass Challenge", pgcr!("vault_of_glass.jpg")),
    },
    CatalogDeclaration {
        id: "raid-deep-stone-crypt",
        hashes: &[910_380_154, 3_976_949_817],
        entry: challenge("Deep Stone Crypt Challenge", pgcr!("europa-raid-deep-stone-crypt.jpg")),
    },
    CatalogDeclaration {
        id: "raid-garden-of-salvation",
        hashes: &[2_659_723_068, 3_458_480_158, 3_845_997_235],
        entry: challenge("Garden of Salvation Challenge", pgcr!("raid_garden_of_salvation.jpg")),
    },
    CatalogDeclaration {
        id: "raid-last-wish",
        hashes: &[2_122_313_384, 1_661_734_046],
        entry: challenge("Last Wish Challenge", pgcr!("raid_beanstalk.jpg")),
    },
    // Empire Hunts
    CatalogDeclaration {
        id: "empire-hunt-warrior",
        hashes: &[2_424_021_445, 2_424_021_444, 2_424_021_447],
        entry: weekly("Empire Hunt", "The Warrior", pgcr!("europa_empire_hunt_warrior.jpg")),
    },
    CatalogDeclaration {
        id: "empire-hunt-technocrat",
        hashes: &[2_449_714_930, 2_449_714_931, 2_449_714_928],
        entry: weekly("Empire Hunt", "The Technocrat", pgcr!("europa_empire_hunt_technocrat.jpg")),
    },
    CatalogDeclaration {
        id: "empire-hunt-dark-priestess",
        hashes: &[1_212_137_924, 1_212_137_925, 1_212_137_926],
        entry: weekly("Empire Hunt", "The Dark Priestess", pgcr!("europa_empire_hunt_dark_priestess.jpg")),
    },
    // Nightmare Hunts; several run each week
    CatalogDeclaration {
        id: "nightmare-hunt-anguish",
        hashes: &[4_098_556_693, 1_188_363_426, 2_479_262_829],
        entry: weekly("Nightmare Hunt", "Anguish", pgcr!("nightmare_hunt_anguish.jpg")),
    },
    CatalogDeclaration {
        id: "nightmare-hunt-isolation",
        hashes: &[3_205_253_945, 2_450_170_730, 2_450_170_731],
        entry: weekly("Nightmare Hunt", "Isolation", pgcr!("nightmare_hunt_isolation.jpg")),
    },
    CatalogDeclaration {
        id: "nightmare-hunt-despair",
        hashes: &[1_342_492_675, 2_380_555_126, 2_380_555_127],
        entry: weekly("Nightmare Hunt", "Despair", pgcr!("nightmare_hunt_despair.jpg")),
    },
    CatalogDeclaration {
        id: "nightmare-hunt-insanity",
        hashes: &[571_058_904, 1_907_493_625, 1_907_493_624],
        entry: weekly("Nightmare Hunt", "Insanity", pgcr!("nightmare_hunt_insanity.jpg")),
    },
    CatalogDeclaration {
        id: "nightmare-hunt-pride",
        hashes: &[1_294_490_226, 3_280_234_344, 3_280_234_345],
        entry: weekly("Nightmare Hunt", "Pride", pgcr!("nightmare_hunt_pride.jpg")),
    },
    CatalogDeclaration {
        id: "nightmare-hunt-rage",
        hashes: &[2_639_701_103, 1_326_496_189, 1_326_496_188],
        entry: weekly("Nightmare Hunt", "Rage", pgcr!("nightmare_hunt_rage.jpg")),
    },
    CatalogDeclaration {
        id: "nightmare-hunt-servitude",
        hashes: &[2_046_332_536, 1_928_961_926, 1_928_961_927],
        entry: weekly("Nightmare Hunt", "Servitude", pgcr!("nightmare_hunt_servitude.jpg")),
    },
    CatalogDeclaration {
        id: "nightmare-hunt-fear",
        hashes: &[4_190_119_662, 1_291_779_549, 1_291_779_548],
        entry: weekly("Nightmare Hunt", "Fear", pgcr!("nightmare_hunt_fear.jpg")),
    },
    // Featured Crucible playlist
    CatalogDeclaration {
        id: "crucible-clash",
        hashes: &[2_091_731_913, 1_113_451_448],
        entry: weekly("Featured Crucible Playlist", "Clash", pgcr!("crucible_clash.jpg")),
    },
    CatalogDeclaration {
        id: "crucible-momentum-control",
        hashes: &[952_904_835, 2_303_927_902],
        entry: weekly("Featured Crucible Playlist", "Momentum Control", pgcr!("crucible_momentum_control.jpg")),
    },
    CatalogDeclaration {
        id: "crucible-mayhem",
        hashes: &[1_264_443_021, 3_753_505_781],
        entry: weekly("Featured Crucible Playlist", "Mayhem", pgcr!("crucible_mayhem.jpg")),
    },
    CatalogDeclaration {
        id: "crucible-rumble",
        hashes: &[2_404_525_917, 1_859_507_212],
        entry: weekly("Featured Crucible Playlist", "Rumble", pgcr!("crucible_rumble.jpg")),
    },
    CatalogDeclaration {
        id: "crucible-showdown",
        hashes: &[1_457_072_306, 3_488_324_337],
        entry: weekly("Featured Crucible Playlist", "Showdown", pgcr!("crucible_showdown.jpg")),
    },
    CatalogDeclaration {
        id: "crucible-team-scorched",
        hashes: &[3_897_312_654, 2_754_695_317],
        entry: weekly("Featured Crucible Playlist", "Team Scorched", pgcr!("crucible_team_scorched.jpg")),
    },
    CatalogDeclaration {
        id: "crucible-supremacy",
        hashes: &[2_754_695_318, 1_077_850_348],
        entry: weekly("Featured Crucible Playlist", "Supremacy", pgcr!("crucible_supremacy.jpg")),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const PGCR: &str = "/img/destiny_content/pgcr/";

    #[test]
    fn test_images_live_under_pgcr() {
        for declaration in DECLARATIONS {
            assert!(
                declaration.entry.image_url_template.starts_with(PGCR),
                "{} has an unexpected image path",
                declaration.id
            );
        }
    }

    #[test]
    fn test_declaration_ids_unique() {
        let mut ids: Vec<_> = DECLARATIONS.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DECLARATIONS.len());
    }
}
