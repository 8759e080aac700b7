//! Built-in lesson content.
//!
//! Lessons are reference data, read-only to the engine: the engine only
//! ever asks "which exact sentences solve the current problem" and
//! "which tokens must be dealt". Surfaces are the stable keys into the
//! token catalog.

use serde::{Deserialize, Serialize};

/// One translation problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProblem {
    /// Stable identifier.
    pub id: String,

    /// English prompt shown to the student.
    pub prompt: String,

    /// Accepted solutions, as exact surface-form strings.
    pub solutions: Vec<String>,

    /// Surfaces of the tokens that must appear in the dealt hand.
    pub required: Vec<String>,
}

impl LessonProblem {
    /// Does the concatenated surface form solve this problem?
    #[must_use]
    pub fn accepts(&self, sentence: &str) -> bool {
        self.solutions.iter().any(|s| s == sentence)
    }
}

/// A lesson: a vocabulary pool plus a problem sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Surfaces of the lesson's vocabulary, used as the distractor pool.
    pub vocabulary: Vec<String>,

    pub problems: Vec<LessonProblem>,
}

fn problem(id: &str, prompt: &str, solutions: &[&str], required: &[&str]) -> LessonProblem {
    LessonProblem {
        id: id.to_string(),
        prompt: prompt.to_string(),
        solutions: solutions.iter().map(|s| s.to_string()).collect(),
        required: required.iter().map(|s| s.to_string()).collect(),
    }
}

fn strings(surfaces: &[&str]) -> Vec<String> {
    surfaces.iter().map(|s| s.to_string()).collect()
}

/// The built-in lesson set.
#[must_use]
pub fn builtin_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: "L1".to_string(),
            title: "Basic Identity".to_string(),
            description: "Introducing yourself".to_string(),
            vocabulary: strings(&[
                "好", "你", "我", "叫", "什么", "名字", "姓", "贵", "请", "问", "王", "李",
                "小姐", "先生", "呢", "朋友", "中文", "英文", "不", "是", "他", "她", "这",
                "那", "也", "老师", "学生", "吗", "人", "中国", "北京", "住在", "美国",
                "夏威夷", "纽约", "的",
            ]),
            problems: vec![
                problem(
                    "L1-P1",
                    "Translate: \"I am a teacher\"",
                    &["我是老师", "我是一个老师"],
                    &["我", "是", "老师"],
                ),
                problem(
                    "L1-P2",
                    "Translate: \"You are a student\"",
                    &["你是学生", "你是一个学生"],
                    &["你", "是", "学生"],
                ),
                problem(
                    "L1-P3",
                    "Translate: \"Is he your friend?\"",
                    &["他是你的朋友吗", "他是你朋友吗"],
                    &["他", "是", "你", "的", "朋友", "吗"],
                ),
                problem(
                    "L1-P4",
                    "Translate: \"I am not a teacher\"",
                    &["我不是老师"],
                    &["我", "不", "是", "老师"],
                ),
                problem(
                    "L1-P5",
                    "Translate: \"Are you American?\"",
                    &["你是美国人吗"],
                    &["你", "是", "美国", "人", "吗"],
                ),
                problem(
                    "L1-P6",
                    "Translate: \"He lives in Beijing\"",
                    &["他住在北京"],
                    &["他", "住在", "北京"],
                ),
                problem(
                    "L1-P7",
                    "Translate: \"What is her name?\"",
                    &["她叫什么名字"],
                    &["她", "叫", "什么", "名字"],
                ),
                problem(
                    "L1-P8",
                    "Translate: \"My surname is Wang\"",
                    &["我姓王"],
                    &["我", "姓", "王"],
                ),
            ],
        },
        Lesson {
            id: "L2".to_string(),
            title: "Likes & Dislikes".to_string(),
            description: "Expressing preferences".to_string(),
            vocabulary: strings(&[
                "我们", "你们", "他们", "都", "说", "的", "我的", "你的", "他的", "有",
                "没有", "和", "想", "喜欢", "爸爸", "妈妈", "姐姐", "哥哥", "弟弟", "妹妹",
                "照片", "个", "谁", "家", "几", "口", "两", "做", "工作", "律师", "医生",
                "在", "哪里", "为什么", "因为",
            ]),
            problems: vec![
                problem(
                    "L2-P1",
                    "Translate: \"I like Chinese food\"",
                    &["我喜欢中国菜", "我喜欢吃中国菜", "我喜欢中国饭", "我喜欢吃中国饭"],
                    &["我", "喜欢", "中国", "饭", "菜"],
                ),
                problem(
                    "L2-P2",
                    "Translate: \"I do not like exams\"",
                    &["我不喜欢考试"],
                    &["我", "不", "喜欢", "考试"],
                ),
                problem(
                    "L2-P3",
                    "Translate: \"We all like him\"",
                    &["我们都喜欢他"],
                    &["我们", "都", "喜欢", "他"],
                ),
                problem(
                    "L2-P4",
                    "Translate: \"My dad is a doctor\"",
                    &["我爸爸是医生", "我的爸爸是医生"],
                    &["我", "爸爸", "是", "医生"],
                ),
                problem(
                    "L2-P5",
                    "Translate: \"Whose photo is this?\"",
                    &["这是谁的照片"],
                    &["这", "是", "谁", "的", "照片"],
                ),
                problem(
                    "L2-P6",
                    "Translate: \"How many people in your family?\"",
                    &["你家有几口人"],
                    &["你", "家", "有", "几", "口", "人"],
                ),
                problem(
                    "L2-P7",
                    "Translate: \"Who is she?\"",
                    &["她是谁"],
                    &["她", "是", "谁"],
                ),
                problem(
                    "L2-P8",
                    "Translate: \"Where does he work?\"",
                    &["他在哪里工作"],
                    &["他", "在", "哪里", "工作"],
                ),
            ],
        },
        Lesson {
            id: "L3".to_string(),
            title: "Making Plans".to_string(),
            description: "Time and arrangements".to_string(),
            vocabulary: strings(&[
                "月", "号", "星期", "今天", "明天", "昨天", "现在", "点", "早上", "晚上",
                "生日", "今年", "岁", "要", "跟", "会", "看", "去", "来", "可是", "所以",
                "可以", "怎么样", "爱", "再见", "吃", "饭", "谢谢", "参加", "很", "高兴",
                "还", "学校", "只", "菜",
            ]),
            problems: vec![
                problem(
                    "L3-P1",
                    "Translate: \"Tomorrow evening\"",
                    &["明天晚上"],
                    &["明天", "晚上"],
                ),
                problem(
                    "L3-P2",
                    "Translate: \"Tomorrow evening I treat\"",
                    &["明天晚上我请客"],
                    &["明天", "晚上", "我", "请客"],
                ),
                problem(
                    "L3-P3",
                    "Translate: \"What time is it now?\"",
                    &["现在几点"],
                    &["现在", "几", "点"],
                ),
                problem(
                    "L3-P4",
                    "Translate: \"I go to Beijing tomorrow\"",
                    &["我明天去北京", "明天我去北京"],
                    &["我", "明天", "去", "北京"],
                ),
                problem(
                    "L3-P5",
                    "Translate: \"Thank you teacher\"",
                    &["谢谢老师"],
                    &["谢谢", "老师"],
                ),
                problem(
                    "L3-P6",
                    "Translate: \"I am very happy\"",
                    &["我很高兴"],
                    &["我", "很", "高兴"],
                ),
                problem(
                    "L3-P7",
                    "Translate: \"Come to my home\"",
                    &["来我家"],
                    &["来", "我", "家"],
                ),
                problem(
                    "L3-P8",
                    "Translate: \"Goodbye\"",
                    &["再见"],
                    &["再见"],
                ),
            ],
        },
    ]
}
