//! Built-in vocabulary manifest (HSK-1 lessons 1-6).
//!
//! The manifest is the immutable reference table everything above reads:
//! token definitions with their behavioral flags, the two always-available
//! shelves, and the deck cycle used when a sandbox game is dealt.

use super::registry::TokenRegistry;
use super::token::WordClass::{Adjective, Function, Noun, Verb, Wildcard};
use super::token::{TokenDef, TokenId, WordClass};

fn w(surface: &str, pinyin: &str, gloss: &str, class: WordClass) -> TokenDef {
    TokenDef::new(surface, pinyin, gloss, class)
}

/// Build the standard vocabulary catalog.
///
/// Registration order is the manifest order, which fixes the token IDs
/// and the deck cycle.
#[must_use]
pub fn standard_catalog() -> TokenRegistry {
    let mut reg = TokenRegistry::new();

    let defs = vec![
        // --- Special grammar (power-ups) ---
        w("过", "guò", "(past tense)", Function).particle(),
        w("虽然", "suī rán", "although", Function),
        w("但是", "dàn shì", "but", Function),
        // --- Lesson 1 ---
        w("好", "hǎo", "good", Adjective),
        w("你", "nǐ", "you", Noun).pronoun(),
        w("我", "wǒ", "I/me", Noun).pronoun(),
        w("叫", "jiào", "to be called", Verb).transitive(),
        w("什么", "shén me", "what", Function).interrogative(),
        w("名字", "míng zi", "name", Noun),
        w("姓", "xìng", "surname", Verb).transitive(),
        w("贵", "guì", "noble/expensive", Adjective),
        w("请", "qǐng", "please/invite", Verb),
        w("问", "wèn", "ask", Verb).transitive(),
        w("王", "wáng", "Wang (surname)", Noun),
        w("李", "lǐ", "Li (surname)", Noun),
        w("小姐", "xiǎo jiě", "Miss", Noun),
        w("先生", "xiān sheng", "Mr.", Noun),
        w("呢", "ne", "(particle)", Function).particle(),
        w("朋友", "péng you", "friend", Noun),
        w("中文", "zhōng wén", "Chinese", Noun),
        w("英文", "yīng wén", "English", Noun),
        w("不", "bù", "not/no", Function).modifier(),
        w("是", "shì", "is/am/are", Verb).copula(),
        w("他", "tā", "he", Noun).pronoun(),
        w("她", "tā", "she", Noun).pronoun(),
        w("这", "zhè", "this", Noun).demonstrative(),
        w("那", "nà", "that", Noun).demonstrative(),
        w("也", "yě", "also", Function).modifier(),
        w("老师", "lǎo shī", "teacher", Noun),
        w("学生", "xué sheng", "student", Noun),
        w("吗", "ma", "(question)", Function).question_particle(),
        w("人", "rén", "person", Noun),
        w("中国", "zhōng guó", "China", Noun),
        w("北京", "běi jīng", "Beijing", Noun),
        w("住在", "zhù zài", "live in", Verb),
        w("美国", "měi guó", "USA", Noun),
        w("夏威夷", "xià wēi yí", "Hawaii", Noun),
        w("纽约", "niǔ yuē", "New York", Noun),
        // --- Lesson 2 ---
        w("我们", "wǒ men", "we/us", Noun).pronoun(),
        w("你们", "nǐ men", "you (pl)", Noun).pronoun(),
        w("他们", "tā men", "they", Noun).pronoun(),
        w("都", "dōu", "all/both", Function).modifier(),
        w("说", "shuō", "speak", Verb).transitive(),
        w("的", "de", "(possessive)", Function).particle(),
        w("我的", "wǒ de", "my", Noun),
        w("你的", "nǐ de", "your", Noun),
        w("他的", "tā de", "his", Noun),
        w("有", "yǒu", "have", Verb).transitive(),
        w("没有", "méi yǒu", "not have", Verb).negation_existential().transitive(),
        w("和", "hé", "and", Function),
        w("想", "xiǎng", "want/think", Verb).transitive(),
        w("喜欢", "xǐ huān", "like", Verb).transitive(),
        w("爸爸", "bà ba", "dad", Noun),
        w("妈妈", "mā ma", "mom", Noun),
        w("姐姐", "jiě jie", "older sister", Noun),
        w("哥哥", "gē ge", "older brother", Noun),
        w("弟弟", "dì di", "younger brother", Noun),
        w("妹妹", "mèi mei", "younger sister", Noun),
        w("照片", "zhào piàn", "photo", Noun),
        w("个", "gè", "(measure word)", Function).measure_word(),
        w("谁", "shéi", "who", Noun).interrogative(),
        w("家", "jiā", "home/family", Noun),
        w("几", "jǐ", "how many", Function).number().interrogative(),
        w("口", "kǒu", "(measure word)", Function).measure_word(),
        w("两", "liǎng", "two", Noun).number(),
        w("做", "zuò", "do", Verb),
        w("工作", "gōng zuò", "work", Verb),
        w("律师", "lǜ shī", "lawyer", Noun),
        w("医生", "yī shēng", "doctor", Noun),
        w("在", "zài", "at/in", Function).locative(),
        w("哪里", "nǎ lǐ", "where", Noun).interrogative(),
        w("为什么", "wèi shén me", "why", Function).interrogative(),
        w("因为", "yīn wèi", "because", Function),
        // --- Lesson 3 ---
        w("月", "yuè", "month", Noun).measure_word(),
        w("号", "hào", "day/number", Noun).measure_word(),
        w("星期", "xīng qī", "week", Noun).measure_word(),
        w("今天", "jīn tiān", "today", Noun).time_word(),
        w("明天", "míng tiān", "tomorrow", Noun).time_word(),
        w("昨天", "zuó tiān", "yesterday", Noun).time_word(),
        w("现在", "xiàn zài", "now", Noun).time_word(),
        w("点", "diǎn", "o'clock", Noun).measure_word(),
        w("早上", "zǎo shang", "morning", Noun).time_word(),
        w("晚上", "wǎn shang", "evening", Noun).time_word(),
        w("生日", "shēng rì", "birthday", Noun),
        w("今年", "jīn nián", "this year", Noun).time_word(),
        w("岁", "suì", "years old", Noun).measure_word(),
        w("要", "yào", "want/will", Verb).transitive(),
        w("跟", "gēn", "with", Function),
        w("会", "huì", "can/know how", Verb),
        w("看", "kàn", "look/watch", Verb),
        w("去", "qù", "go", Verb),
        w("来", "lái", "come", Verb),
        w("可是", "kě shì", "but", Function),
        w("所以", "suǒ yǐ", "so", Function),
        w("可以", "kě yǐ", "can/may", Verb),
        w("怎么样", "zěn me yàng", "how is it", Function).interrogative(),
        w("爱", "ài", "love", Verb).transitive(),
        w("再见", "zài jiàn", "goodbye", Verb),
        w("吃", "chī", "eat", Verb),
        w("饭", "fàn", "meal/rice", Noun),
        w("谢谢", "xiè xie", "thanks", Verb),
        w("参加", "cān jiā", "participate", Verb),
        w("很", "hěn", "very", Adjective).modifier(),
        w("高兴", "gāo xìng", "happy", Adjective),
        w("还", "hái", "still/also", Function).modifier(),
        w("学校", "xué xiào", "school", Noun),
        w("只", "zhǐ", "only", Function).modifier(),
        w("菜", "cài", "dish/cuisine", Noun),
        // --- Lesson 4 ---
        w("周末", "zhōu mò", "weekend", Noun).time_word(),
        w("常常", "cháng cháng", "often", Function).modifier(),
        w("外国", "wài guó", "foreign", Noun),
        w("请客", "qǐng kè", "treat (host)", Verb),
        w("爱好", "ài hào", "hobby", Noun),
        w("东西", "dōng xi", "things", Noun),
        w("上网", "shàng wǎng", "go online", Verb),
        w("打球", "dǎ qiú", "play ball", Verb),
        w("电影", "diàn yǐng", "movie", Noun),
        w("唱歌", "chàng gē", "sing", Verb),
        w("听", "tīng", "listen", Verb),
        w("音乐", "yīn yuè", "music", Noun),
        w("有的", "yǒu de", "some", Noun),
        w("的时候", "de shí hou", "when...", Function),
        w("放学", "fàng xué", "finish school", Verb),
        w("好久", "hǎo jiǔ", "long time", Adjective),
        w("不错", "bú cuò", "not bad", Adjective),
        w("觉得", "jué de", "think/feel", Verb).transitive(),
        w("有意思", "yǒu yì si", "interesting", Adjective),
        w("睡觉", "shuì jiào", "sleep", Verb),
        w("算了", "suàn le", "forget it", Verb),
        w("找", "zhǎo", "find", Verb).transitive(),
        w("别人", "bié rén", "others", Noun),
        // --- Lesson 5 ---
        w("快", "kuài", "fast", Adjective),
        w("进来", "jìn lái", "come in", Verb),
        w("介绍", "jiè shào", "introduce", Verb).transitive(),
        w("一下", "yí xià", "a bit", Function),
        w("喝", "hē", "drink", Verb),
        w("水", "shuǐ", "water", Noun),
        w("茶", "chá", "tea", Noun),
        w("咖啡", "kā fēi", "coffee", Noun),
        w("可乐", "kě lè", "cola", Noun),
        w("果汁", "guǒ zhī", "juice", Noun),
        w("带", "dài", "bring", Verb).transitive(),
        w("漂亮", "piào liang", "pretty", Adjective),
        w("帅", "shuài", "handsome", Adjective),
        w("坐", "zuò", "sit", Verb),
        w("对不起", "duì bu qǐ", "sorry", Verb),
        w("吧", "ba", "(suggestion)", Function),
        w("一起", "yì qǐ", "together", Function),
        w("聊天", "liáo tiān", "chat", Verb),
        w("才", "cái", "only then", Function),
        w("了", "le", "(particle)", Function).particle(),
        w("给", "gěi", "give/to", Verb).transitive(),
        // --- Lesson 6 ---
        w("最", "zuì", "most", Function).modifier(),
        w("以后", "yǐ hòu", "after", Noun).time_word(),
        w("以前", "yǐ qián", "before", Noun).time_word(),
        w("不好意思", "bù hǎo yì si", "embarrassed", Adjective),
        w("要是", "yào shi", "if", Function),
        w("电子邮件", "diàn zǐ yóu jiàn", "email", Noun),
        w("收到", "shōu dào", "receive", Verb),
        w("发", "fā", "send", Verb),
        w("写", "xiě", "write", Verb),
        w("就", "jiù", "then/just", Function),
        w("您", "nín", "You (polite)", Noun).pronoun(),
        w("打电话", "dǎ diàn huà", "make call", Verb),
        w("哪", "nǎ", "which", Function).demonstrative().interrogative(),
        w("位", "wèi", "(measure)", Function).measure_word(),
        w("时间", "shí jiān", "time", Noun),
        w("开会", "kāi huì", "meeting", Verb),
        w("约时间", "yuē shí jiān", "schedule", Verb),
        w("手机", "shǒu jī", "mobile", Noun),
        w("考试", "kǎo shì", "exam", Noun),
        w("方便", "fāng biàn", "convenient", Adjective),
        w("办公室", "bàn gōng shì", "office", Noun),
        w("等", "děng", "wait", Verb),
        w("别", "bié", "don't", Function).modifier(),
        w("客气", "kè qi", "polite", Adjective),
        w("帮", "bāng", "help", Verb),
        w("准备", "zhǔn bèi", "prepare", Verb),
        w("练习", "liàn xí", "practice", Verb),
        w("得", "děi", "must", Function).particle(),
        w("见面", "jiàn miàn", "meet", Verb),
        w("回来", "huí lái", "come back", Verb),
        w("应该", "yīng gāi", "should", Verb),
        w("怎么", "zěn me", "how", Function).interrogative(),
        // --- Digits (for dates, ages, counting phrases) ---
        w("一", "yī", "one", Noun).number(),
        w("二", "èr", "two (digit)", Noun).number(),
        w("三", "sān", "three", Noun).number(),
        w("四", "sì", "four", Noun).number(),
        w("五", "wǔ", "five", Noun).number(),
        w("六", "liù", "six", Noun).number(),
        w("七", "qī", "seven", Noun).number(),
        w("八", "bā", "eight", Noun).number(),
        w("九", "jiǔ", "nine", Noun).number(),
        w("十", "shí", "ten", Noun).number(),
        // Wild (purple)
        w("🀄", "Wild", "Any", Wildcard),
    ];

    for def in defs {
        reg.register(def);
    }
    reg
}

/// Surfaces of the power-up shelf (grammar markers and connectors).
pub const POWER_UP_SURFACES: &[&str] = &["的", "了", "吗", "过", "因为", "所以", "虽然", "但是"];

/// Surfaces of the basic vocabulary shelf (core verbs and preps).
pub const BASIC_SHELF_SURFACES: &[&str] = &["是", "在", "要", "想", "去", "喜欢", "有", "没有"];

fn surfaces_to_ids(registry: &TokenRegistry, surfaces: &[&str]) -> Vec<TokenId> {
    surfaces
        .iter()
        .map(|s| {
            registry
                .by_surface(s)
                .unwrap_or_else(|| panic!("shelf surface {s:?} missing from catalog"))
                .id
        })
        .collect()
}

/// Token IDs of the power-up shelf.
#[must_use]
pub fn power_up_shelf(registry: &TokenRegistry) -> Vec<TokenId> {
    surfaces_to_ids(registry, POWER_UP_SURFACES)
}

/// Token IDs of the basic vocabulary shelf.
#[must_use]
pub fn basic_shelf(registry: &TokenRegistry) -> Vec<TokenId> {
    surfaces_to_ids(registry, BASIC_SHELF_SURFACES)
}

/// All shelf token IDs (both shelves).
///
/// Shelf tokens are always available during the MELD phase and never
/// consume deck supply.
#[must_use]
pub fn shelf_tokens(registry: &TokenRegistry) -> Vec<TokenId> {
    let mut ids = power_up_shelf(registry);
    ids.extend(basic_shelf(registry));
    ids
}

/// Token cycle for a freshly generated deck of `count` cards.
///
/// Cycles the manifest in registration order, skipping tokens that are
/// permanently available on the basic shelf. The caller mints instances
/// and shuffles.
#[must_use]
pub fn deck_tokens(registry: &TokenRegistry, count: usize) -> Vec<TokenId> {
    let shelf = basic_shelf(registry);
    let cycle: Vec<TokenId> = (0..registry.len() as u32)
        .map(TokenId::new)
        .filter(|id| !shelf.contains(id))
        .collect();

    (0..count).map(|i| cycle[i % cycle.len()]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let reg = standard_catalog();
        assert!(reg.len() > 150);
        assert!(reg.by_surface("老师").is_some());
        assert!(reg.by_surface("🀄").is_some());
    }

    #[test]
    fn test_flag_spot_checks() {
        let reg = standard_catalog();

        let shi = reg.by_surface("是").unwrap();
        assert!(shi.copula);
        assert_eq!(shi.class, WordClass::Verb);

        let zai = reg.by_surface("在").unwrap();
        assert!(zai.locative);

        let meiyou = reg.by_surface("没有").unwrap();
        assert!(meiyou.modifier && meiyou.negation_existential && meiyou.transitive);

        let hao_day = reg.by_surface("号").unwrap();
        assert!(hao_day.measure_word);

        let san = reg.by_surface("三").unwrap();
        assert!(san.number);

        let ma = reg.by_surface("吗").unwrap();
        assert!(ma.question_particle && !ma.particle);

        let le = reg.by_surface("了").unwrap();
        assert!(le.particle);
    }

    #[test]
    fn test_shelves_resolve() {
        let reg = standard_catalog();
        assert_eq!(power_up_shelf(&reg).len(), POWER_UP_SURFACES.len());
        assert_eq!(basic_shelf(&reg).len(), BASIC_SHELF_SURFACES.len());
        assert_eq!(
            shelf_tokens(&reg).len(),
            POWER_UP_SURFACES.len() + BASIC_SHELF_SURFACES.len()
        );
    }

    #[test]
    fn test_deck_excludes_basic_shelf() {
        let reg = standard_catalog();
        let shelf = basic_shelf(&reg);
        let deck = deck_tokens(&reg, 80);

        assert_eq!(deck.len(), 80);
        assert!(deck.iter().all(|id| !shelf.contains(id)));
    }

    #[test]
    fn test_deck_cycles_catalog() {
        let reg = standard_catalog();
        // More cards than distinct non-shelf tokens: the cycle repeats.
        let n = reg.len() + 10;
        let deck = deck_tokens(&reg, n);
        assert_eq!(deck.len(), n);
        assert_eq!(deck[0], deck[reg.len() - BASIC_SHELF_SURFACES.len()]);
    }
}
