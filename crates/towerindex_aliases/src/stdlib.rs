//! Standard alias corpus.
//!
//! Contains the default towers, heroes, maps, and map difficulties.

use towerindex_foundation::Result;

use crate::config::RegistryConfig;
use crate::corpus::AliasCorpus;
use crate::registry::AliasRegistry;

/// Primary towers.
pub const PRIMARY_TOWERS: &str = r#"
[[tower]]
canonical = "dart_monkey"
aliases = ["dart monkey", "dart", "dm"]
directory = "towers/primary"
upgrades = [
    ["sharp shots", "razor sharp shots", "spike-o-pult", "juggernaut", "ultra-juggernaut"],
    ["quick shots", "very quick shots", "triple shot", "super monkey fan club", "plasma monkey fan club"],
    ["long range darts", "enhanced eyesight", "crossbow", "sharp shooter", "crossbow master"],
]

[[tower]]
canonical = "boomerang_monkey"
aliases = ["boomerang monkey", "boomerang", "boomer", "rang"]
directory = "towers/primary"
upgrades = [
    ["improved rangs", "glaives", "glaive ricochet", "m.o.a.r. glaives", "glaive lord"],
    ["faster throwing", "faster rangs", "bionic boomerang", "turbo charge", "perma charge"],
    ["long range rangs", "red hot rangs", "kylie boomerang", "moab press", "moab domination"],
]

[[tower]]
canonical = "bomb_shooter"
aliases = ["bomb shooter", "bomb", "cannon"]
directory = "towers/primary"
upgrades = [
    ["bigger bombs", "heavy bombs", "really big bombs", "bloon impact", "bloon crush"],
    ["faster reload", "missile launcher", "moab mauler", "moab assassin", "moab eliminator"],
    ["extra range", "frag bombs", "cluster bombs", "recursive cluster", "bomb blitz"],
]

[[tower]]
canonical = "tack_shooter"
aliases = ["tack shooter", "tack"]
directory = "towers/primary"
upgrades = [
    ["faster shooting", "even faster shooting", "hot shots", "ring of fire", "inferno ring"],
    ["long range tacks", "super range tacks", "blade shooter", "blade maelstrom", "super maelstrom"],
    ["more tacks", "even more tacks", "tack sprayer", "overdrive", "the tack zone"],
]

[[tower]]
canonical = "ice_monkey"
aliases = ["ice monkey", "ice"]
directory = "towers/primary"
upgrades = [
    ["permafrost", "cold snap", "ice shards", "embrittlement", "super brittle"],
    ["enhanced freeze", "deep freeze", "arctic wind", "snowstorm", "absolute zero"],
    ["larger radius", "re-freeze", "cryo cannon", "icicles", "icicle impale"],
]

[[tower]]
canonical = "glue_gunner"
aliases = ["glue gunner", "glue"]
directory = "towers/primary"
upgrades = [
    ["glue soak", "corrosive glue", "bloon dissolver", "bloon liquefier", "the bloon solver"],
    ["bigger globs", "glue splatter", "glue hose", "glue strike", "glue storm"],
    ["stickier glue", "stronger glue", "moab glue", "relentless glue", "super glue"],
]
"#;

/// Military towers.
pub const MILITARY_TOWERS: &str = r#"
[[tower]]
canonical = "sniper_monkey"
aliases = ["sniper monkey", "sniper"]
directory = "towers/military"
upgrades = [
    ["full metal jacket", "large calibre", "deadly precision", "maim moab", "cripple moab"],
    ["night vision goggles", "shrapnel shot", "bouncing bullet", "supply drop", "elite sniper"],
    ["fast firing", "even faster firing", "semi-automatic", "full auto rifle", "elite defender"],
]

[[tower]]
canonical = "monkey_sub"
aliases = ["monkey sub", "sub", "submarine"]
directory = "towers/military"
upgrades = [
    ["longer range", "advanced intel", "submerge and support", "bloontonium reactor", "energizer"],
    ["barbed darts", "heat-tipped darts", "ballistic missile", "first strike capability", "pre-emptive strike"],
    ["twin guns", "airburst darts", "triple guns", "armor piercing darts", "sub commander"],
]

[[tower]]
canonical = "monkey_buccaneer"
aliases = ["monkey buccaneer", "buccaneer", "bucc", "boat"]
directory = "towers/military"
upgrades = [
    ["faster shooting", "double shot", "destroyer", "aircraft carrier", "carrier flagship"],
    ["grape shot", "hot shot", "cannon ship", "monkey pirates", "pirate lord"],
    ["long range", "crows nest", "merchantman", "favored trades", "trade empire"],
]

[[tower]]
canonical = "monkey_ace"
aliases = ["monkey ace", "ace"]
directory = "towers/military"
upgrades = [
    ["rapid fire", "lots more darts", "fighter plane", "operation dart storm", "sky shredder"],
    ["exploding pineapple", "spy plane", "bomber ace", "ground zero", "tsar bomba"],
    ["sharper darts", "centered path", "neva-miss targeting", "spectre", "flying fortress"],
]

[[tower]]
canonical = "heli_pilot"
aliases = ["heli pilot", "heli", "helicopter"]
directory = "towers/military"
upgrades = [
    ["quad darts", "pursuit", "razor rotors", "apache dartship", "apache prime"],
    ["bigger jets", "ifr", "downdraft", "support chinook", "special poperations"],
    ["faster darts", "faster firing", "moab shove", "comanche defense", "comanche commander"],
]

[[tower]]
canonical = "mortar_monkey"
aliases = ["mortar monkey", "mortar"]
directory = "towers/military"
upgrades = [
    ["bigger blast", "bloon buster", "shell shock", "the big one", "the biggest one"],
    ["faster reload", "rapid reload", "heavy shells", "artillery battery", "pop and awe"],
    ["increased accuracy", "burny stuff", "signal flare", "shattering shells", "blooncineration"],
]

[[tower]]
canonical = "dartling_gunner"
aliases = ["dartling gunner", "dartling", "gunner"]
directory = "towers/military"
upgrades = [
    ["focused firing", "laser shock", "laser cannon", "plasma accelerator", "ray of doom"],
    ["advanced targeting", "faster barrel spin", "hydra rocket pods", "rocket storm", "m.a.d"],
    ["faster swivel", "powerful darts", "buckshot", "bloon area denial system", "bloon exclusion zone"],
]
"#;

/// Magic towers.
pub const MAGIC_TOWERS: &str = r#"
[[tower]]
canonical = "wizard_monkey"
aliases = ["wizard monkey", "wizard", "wiz"]
directory = "towers/magic"
upgrades = [
    ["guided magic", "arcane blast", "arcane mastery", "arcane spike", "archmage"],
    ["fireball", "wall of fire", "dragons breath", "summon phoenix", "wizard lord phoenix"],
    ["intense magic", "monkey sense", "shimmer", "necromancer", "prince of darkness"],
]

[[tower]]
canonical = "super_monkey"
aliases = ["super monkey", "super"]
directory = "towers/magic"
upgrades = [
    ["laser blasts", "plasma blasts", "sun avatar", "sun temple", "true sun god"],
    ["super range", "epic range", "robo monkey", "tech terror", "the anti-bloon"],
    ["knockback", "ultravision", "dark knight", "dark champion", "legend of the night"],
]

[[tower]]
canonical = "ninja_monkey"
aliases = ["ninja monkey", "ninja"]
directory = "towers/magic"
upgrades = [
    ["ninja discipline", "sharp shurikens", "double shot", "bloonjitsu", "grandmaster ninja"],
    ["distraction", "counter-espionage", "shinobi tactics", "bloon sabotage", "grand saboteur"],
    ["seeking shuriken", "caltrops", "flash bomb", "sticky bomb", "master bomber"],
]

[[tower]]
canonical = "alchemist"
aliases = ["alchemist", "alch"]
directory = "towers/magic"
upgrades = [
    ["larger potions", "acidic mixture dip", "berserker brew", "stronger stimulant", "permanent brew"],
    ["stronger acid", "perishing potions", "unstable concoction", "transforming tonic", "total transformation"],
    ["faster throwing", "acid pool", "lead to gold", "rubber to gold", "bloon master alchemist"],
]

[[tower]]
canonical = "druid"
aliases = ["druid"]
directory = "towers/magic"
upgrades = [
    ["hard thorns", "heart of thunder", "druid of the storm", "ballista lightning", "superstorm"],
    ["thorn swarm", "heart of oak", "druid of the jungle", "jungles bounty", "spirit of the forest"],
    ["druidic reach", "heart of vengeance", "druid of wrath", "poplust", "avatar of wrath"],
]
"#;

/// Support towers.
pub const SUPPORT_TOWERS: &str = r#"
[[tower]]
canonical = "banana_farm"
aliases = ["banana farm", "farm"]
directory = "towers/support"
upgrades = [
    ["increased production", "greater production", "banana plantation", "banana research facility", "banana central"],
    ["long life bananas", "valuable bananas", "monkey bank", "imf loan", "monkey-nomics"],
    ["ez collect", "banana salvage", "marketplace", "central market", "monkey wall street"],
]

[[tower]]
canonical = "spike_factory"
aliases = ["spike factory", "spactory", "spac"]
directory = "towers/support"
upgrades = [
    ["bigger stacks", "white hot spikes", "spiked balls", "spiked mines", "super mines"],
    ["faster production", "even faster production", "moab shredr", "spike storm", "carpet of spikes"],
    ["long reach", "smart spikes", "long life spikes", "deadly spikes", "perma-spike"],
]

[[tower]]
canonical = "monkey_village"
aliases = ["monkey village", "village", "vill"]
directory = "towers/support"
upgrades = [
    ["bigger radius", "jungle drums", "primary training", "primary mentoring", "primary expertise"],
    ["grow blocker", "radar scanner", "monkey intelligence bureau", "call to arms", "homeland defense"],
    ["monkey business", "monkey commerce", "monkey town", "monkey city", "monkeyopolis"],
]

[[tower]]
canonical = "engineer_monkey"
aliases = ["engineer monkey", "engineer", "engi"]
directory = "towers/support"
upgrades = [
    ["sentry gun", "faster engineering", "sprockets", "sentry expert", "sentry champion"],
    ["larger service area", "deconstruction", "cleansing foam", "overclock", "ultraboost"],
    ["oversize nails", "pin", "double gun", "bloon trap", "xxxl trap"],
]
"#;

/// Heroes.
pub const HEROES: &str = r#"
[[group]]
canonical = "quincy"
aliases = ["quincy", "quincey", "q"]
directory = "heroes"

[[group]]
canonical = "gwendolin"
aliases = ["gwendolin", "gwen"]
directory = "heroes"

[[group]]
canonical = "striker_jones"
aliases = ["striker jones", "striker", "jones"]
directory = "heroes"

[[group]]
canonical = "obyn_greenfoot"
aliases = ["obyn greenfoot", "obyn"]
directory = "heroes"

[[group]]
canonical = "geraldo"
aliases = ["geraldo", "ger"]
directory = "heroes"

[[group]]
canonical = "captain_churchill"
aliases = ["captain churchill", "churchill", "tank"]
directory = "heroes"

[[group]]
canonical = "benjamin"
aliases = ["benjamin", "ben"]
directory = "heroes"

[[group]]
canonical = "ezili"
aliases = ["ezili", "ez"]
directory = "heroes"

[[group]]
canonical = "pat_fusty"
aliases = ["pat fusty", "pat"]
directory = "heroes"

[[group]]
canonical = "adora"
aliases = ["adora"]
directory = "heroes"

[[group]]
canonical = "admiral_brickell"
aliases = ["admiral brickell", "brickell", "brick"]
directory = "heroes"

[[group]]
canonical = "etienne"
aliases = ["etienne", "eti"]
directory = "heroes"

[[group]]
canonical = "sauda"
aliases = ["sauda"]
directory = "heroes"

[[group]]
canonical = "psi"
aliases = ["psi"]
directory = "heroes"

[[group]]
canonical = "corvus"
aliases = ["corvus"]
directory = "heroes"

[[group]]
canonical = "rosalia"
aliases = ["rosalia", "rosa"]
directory = "heroes"
"#;

/// Maps, grouped by difficulty directory.
pub const MAPS: &str = r#"
[[group]]
canonical = "monkey_meadow"
aliases = ["monkey meadow", "meadow", "mm"]
directory = "maps/beginner"

[[group]]
canonical = "tree_stump"
aliases = ["tree stump", "stump"]
directory = "maps/beginner"

[[group]]
canonical = "town_center"
aliases = ["town center", "town centre"]
directory = "maps/beginner"

[[group]]
canonical = "logs"
aliases = ["logs"]
directory = "maps/beginner"

[[group]]
canonical = "cubism"
aliases = ["cubism", "cube"]
directory = "maps/beginner"

[[group]]
canonical = "resort"
aliases = ["resort"]
directory = "maps/beginner"

[[group]]
canonical = "alpine_run"
aliases = ["alpine run", "alpine"]
directory = "maps/beginner"

[[group]]
canonical = "in_the_loop"
aliases = ["in the loop", "itl", "loop"]
directory = "maps/beginner"

[[group]]
canonical = "balance"
aliases = ["balance"]
directory = "maps/intermediate"

[[group]]
canonical = "encrypted"
aliases = ["encrypted"]
directory = "maps/intermediate"

[[group]]
canonical = "bazaar"
aliases = ["bazaar"]
directory = "maps/intermediate"

[[group]]
canonical = "adoras_temple"
aliases = ["adora's temple", "adoras temple", "temple"]
directory = "maps/intermediate"

[[group]]
canonical = "spring_spring"
aliases = ["spring spring"]
directory = "maps/intermediate"

[[group]]
canonical = "kartsndarts"
aliases = ["karts n darts", "kartsndarts", "kd"]
directory = "maps/intermediate"

[[group]]
canonical = "moon_landing"
aliases = ["moon landing", "moon"]
directory = "maps/intermediate"

[[group]]
canonical = "haunted"
aliases = ["haunted"]
directory = "maps/intermediate"

[[group]]
canonical = "mesa"
aliases = ["mesa"]
directory = "maps/advanced"

[[group]]
canonical = "geared"
aliases = ["geared", "gears"]
directory = "maps/advanced"

[[group]]
canonical = "spillway"
aliases = ["spillway"]
directory = "maps/advanced"

[[group]]
canonical = "cargo"
aliases = ["cargo"]
directory = "maps/advanced"

[[group]]
canonical = "pats_pond"
aliases = ["pat's pond", "pats pond", "pond"]
directory = "maps/advanced"

[[group]]
canonical = "peninsula"
aliases = ["peninsula"]
directory = "maps/advanced"

[[group]]
canonical = "high_finance"
aliases = ["high finance"]
directory = "maps/advanced"

[[group]]
canonical = "another_brick"
aliases = ["another brick"]
directory = "maps/advanced"

[[group]]
canonical = "sanctuary"
aliases = ["sanctuary"]
directory = "maps/expert"

[[group]]
canonical = "ravine"
aliases = ["ravine"]
directory = "maps/expert"

[[group]]
canonical = "flooded_valley"
aliases = ["flooded valley", "fv"]
directory = "maps/expert"

[[group]]
canonical = "infernal"
aliases = ["infernal"]
directory = "maps/expert"

[[group]]
canonical = "bloody_puddles"
aliases = ["bloody puddles", "puddles"]
directory = "maps/expert"

[[group]]
canonical = "workshop"
aliases = ["workshop"]
directory = "maps/expert"

[[group]]
canonical = "quad"
aliases = ["quad"]
directory = "maps/expert"

[[group]]
canonical = "dark_castle"
aliases = ["dark castle", "castle"]
directory = "maps/expert"
"#;

/// Map difficulties.
pub const MAP_DIFFICULTIES: &str = r#"
[[group]]
canonical = "beginner"
aliases = ["beginner", "beg"]
directory = "map_difficulties"

[[group]]
canonical = "intermediate"
aliases = ["intermediate", "int"]
directory = "map_difficulties"

[[group]]
canonical = "advanced"
aliases = ["advanced", "adv"]
directory = "map_difficulties"

[[group]]
canonical = "expert"
aliases = ["expert", "exp"]
directory = "map_difficulties"
"#;

/// Parses and concatenates every standard corpus section.
///
/// # Errors
///
/// Returns a `Deserialize` error if a section is not valid TOML.
pub fn standard_corpus() -> Result<AliasCorpus> {
    let mut corpus = AliasCorpus::new();
    for section in [
        PRIMARY_TOWERS,
        MILITARY_TOWERS,
        MAGIC_TOWERS,
        SUPPORT_TOWERS,
        HEROES,
        MAPS,
        MAP_DIFFICULTIES,
    ] {
        corpus.extend(AliasCorpus::from_toml(section)?);
    }
    Ok(corpus)
}

impl AliasRegistry {
    /// Builds a registry over the standard corpus with the default config.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded corpus is malformed.
    pub fn standard() -> Result<Self> {
        Self::new(&standard_corpus()?, RegistryConfig::default())
    }
}
