//! Story assembly from the fixed element catalogs.
//!
//! A story is one theme/scene template with `{character}` filled in and a
//! plot ending appended. Unknown catalog keys fall back rather than fail.

use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::coverage::check_coverage;
use crate::overrides::CustomZhuyinStore;
use crate::types::CoverageReport;

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"));

/// Name used when neither a custom name nor a catalog character applies.
pub const FALLBACK_CHARACTER_NAME: &str = "小動物";
/// Scene name used in titles for unknown scenes.
pub const FALLBACK_SCENE_NAME: &str = "奇妙世界";

const FALLBACK_THEME: &str = "friendship";
const FALLBACK_PLOT: &str = "friend";

pub const CHARACTERS: &[(&str, &str)] = &[
    ("rabbit", "小兔子"),
    ("bear", "小熊"),
    ("cat", "小貓"),
    ("dog", "小狗"),
    ("bird", "小鳥"),
    ("fish", "小魚"),
    ("elephant", "小象"),
    ("monkey", "小猴子"),
    ("pig", "小豬"),
    ("sheep", "小羊"),
    ("duck", "小鴨"),
    ("mouse", "小老鼠"),
];

pub const SCENES: &[(&str, &str)] = &[
    ("forest", "森林"),
    ("ocean", "海邊"),
    ("garden", "花園"),
    ("castle", "城堡"),
    ("farm", "農場"),
    ("space", "太空"),
    ("rainbow", "彩虹橋"),
    ("magic_forest", "魔法森林"),
];

/// Theme → (scene, template). The first scene of a theme is its fallback.
pub const TEMPLATES: &[(&str, &[(&str, &str)])] = &[
    (
        "friendship",
        &[
            ("forest", "在茂密的森林裡，{character}遇到了一隻迷路的小動物。{character}決定幫助它找到回家的路。在尋找的過程中，他們成為了最好的朋友，一起分享快樂和困難。"),
            ("garden", "在美麗的花園裡，{character}發現了一朵會說話的花。這朵花很孤單，{character}每天都來陪它聊天，他們成為了特別的朋友。"),
            ("castle", "在高高的城堡裡，{character}遇到了一位孤單的小公主。{character}用自己的善良和友誼溫暖了公主的心，他們一起在城堡裡快樂地玩耍。"),
        ],
    ),
    (
        "courage",
        &[
            ("forest", "勇敢的{character}在森林裡遇到了一個大挑戰。雖然心裡有點害怕，但{character}深深吸了一口氣，鼓起勇氣面對困難，最終成功克服了挑戰。"),
            ("space", "太空探險家{character}的飛船遇到了故障。在黑暗的太空中，{character}沒有放棄，勇敢地修理飛船，最終安全返回了地球。"),
            ("ocean", "在深藍的海洋裡，{character}遇到了巨大的海浪。{character}沒有退縮，勇敢地游向岸邊，證明了自己的勇氣。"),
        ],
    ),
    (
        "sharing",
        &[
            ("farm", "在農場裡，{character}收穫了很多美味的果實。當看到其他小動物餓肚子時，{character}開心地分享了自己的食物，大家一起享受美味。"),
            ("garden", "在花園裡，{character}找到了一籃子美麗的花朵。{character}把花朵分享給所有的朋友，讓整個花園都充滿了歡聲笑語。"),
            ("castle", "在城堡的寶庫裡，{character}發現了許多寶藏。{character}決定把寶藏分享給需要幫助的人，成為了大家心中的英雄。"),
        ],
    ),
    (
        "helping",
        &[
            ("forest", "在森林裡，{character}看到一隻小鳥從樹上掉下來。{character}輕輕地把小鳥放回巢穴，小鳥的媽媽非常感謝{character}的幫助。"),
            ("farm", "在農場裡，農夫爺爺生病了。善良的{character}主動幫忙照顧農場的動物，讓爺爺能夠好好休息。"),
            ("rainbow", "在彩虹橋上，{character}遇到了一個迷路的小精靈。{character}耐心地指引小精靈回家的路，小精靈送給{character}一個神奇的禮物。"),
        ],
    ),
    (
        "adventure",
        &[
            ("space", "勇敢的太空探險家{character}駕駛著飛船來到了一個神秘的星球。在這裡，{character}發現了會發光的石頭和友善的外星朋友。"),
            ("magic_forest", "在神奇的魔法森林裡，{character}遇到了會說話的樹木和跳舞的蘑菇。{character}和森林裡的魔法生物一起度過了奇妙的冒險時光。"),
            ("castle", "在古老的城堡裡，{character}發現了一個秘密通道。跟隨著通道，{character}找到了傳說中的寶藏和一本神奇的魔法書。"),
        ],
    ),
    (
        "learning",
        &[
            ("forest", "在森林學校裡，{character}學習如何辨認不同的樹葉和花朵。通過努力學習，{character}成為了森林裡最棒的小博士。"),
            ("farm", "在農場裡，{character}跟著農夫爺爺學習如何種植蔬菜。經過耐心的練習，{character}種出了最美味的蘿蔔。"),
            ("ocean", "在海洋學校裡，{character}學習如何游泳。雖然一開始有點困難，但{character}沒有放棄，最終學會了優美的游泳技巧。"),
        ],
    ),
];

/// Plot key → ending template.
pub const PLOT_ENDINGS: &[(&str, &str)] = &[
    ("difficulty", "在遇到困難時，{character}學會了堅持不懈，最終克服了所有挑戰。"),
    ("treasure", "最後，{character}找到了真正的寶藏——那就是友誼和快樂。"),
    ("friend", "通過這次經歷，{character}結交了許多新朋友，大家一起快樂地生活。"),
    ("skill", "經過努力學習，{character}掌握了新的技能，變得更加自信和快樂。"),
];

/// The four picks a reader makes before a story is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryElements {
    pub character: String,
    pub scene: String,
    pub theme: String,
    pub plot: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedStory {
    pub id: String,
    pub title: String,
    pub content: String,
    pub elements: StoryElements,
    pub created_at_ms: u64,
    pub zhuyin_check: CoverageReport,
}

/// Catalog keys and display names, for pickers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryCatalog {
    pub characters: Vec<CatalogEntry>,
    pub scenes: Vec<CatalogEntry>,
    pub themes: Vec<String>,
    pub plots: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub key: String,
    pub name: String,
}

pub fn catalog() -> StoryCatalog {
    let entries = |pairs: &[(&str, &str)]| {
        pairs
            .iter()
            .map(|(key, name)| CatalogEntry {
                key: key.to_string(),
                name: name.to_string(),
            })
            .collect()
    };
    StoryCatalog {
        characters: entries(CHARACTERS),
        scenes: entries(SCENES),
        themes: TEMPLATES.iter().map(|(t, _)| t.to_string()).collect(),
        plots: PLOT_ENDINGS.iter().map(|(p, _)| p.to_string()).collect(),
    }
}

/// Assemble a story and attach its Zhuyin coverage report.
pub fn generate_story(
    elements: &StoryElements,
    custom_name: Option<&str>,
    store: &CustomZhuyinStore,
) -> GeneratedStory {
    let name = character_name(&elements.character, custom_name);
    let template = select_template(&elements.theme, &elements.scene);
    let ending = lookup(PLOT_ENDINGS, &elements.plot)
        .or_else(|| lookup(PLOT_ENDINGS, FALLBACK_PLOT))
        .unwrap_or_default();

    let content = format!("{} {}", fill(template, name), fill(ending, name));
    let scene_name = lookup(SCENES, &elements.scene).unwrap_or(FALLBACK_SCENE_NAME);
    let title = format!("{name}在{scene_name}的故事");
    let zhuyin_check = check_coverage(&content, store);

    let created_at_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    GeneratedStory {
        id: created_at_ms.to_string(),
        title,
        content,
        elements: elements.clone(),
        created_at_ms,
        zhuyin_check,
    }
}

fn character_name<'a>(character: &str, custom_name: Option<&'a str>) -> &'a str {
    custom_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .or_else(|| lookup(CHARACTERS, character))
        .unwrap_or(FALLBACK_CHARACTER_NAME)
}

fn select_template(theme: &str, scene: &str) -> &'static str {
    let scenes = TEMPLATES
        .iter()
        .find(|(t, _)| *t == theme)
        .or_else(|| TEMPLATES.iter().find(|(t, _)| *t == FALLBACK_THEME))
        .map(|(_, scenes)| *scenes)
        .unwrap_or_default();
    lookup(scenes, scene)
        .or_else(|| scenes.first().map(|(_, template)| *template))
        .unwrap_or_default()
}

fn lookup(pairs: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Substitute placeholders. Unknown placeholders are left as written.
fn fill(template: &str, character: &str) -> String {
    RE_PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "character" => character.to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}
