//! Prompt text sent to the completion service. Templates carry `{name}`
//! placeholders filled in by the prompt composer; the payloads they request
//! are the per-mode schemas the response parser expects.

pub const GENERATION_TEMPERATURE: f32 = 0.9;
pub const GENERATION_MAX_TOKENS: u32 = 500;
pub const EVALUATION_TEMPERATURE: f32 = 0.7;
pub const EVALUATION_MAX_TOKENS: u32 = 800;
pub const ASSISTANT_TEMPERATURE: f32 = 0.7;
pub const ASSISTANT_MAX_TOKENS: u32 = 500;

pub const GENERATION_SYSTEM_PROMPT: &str = "你是一个专业的英语教学助手，专门帮助CET4学生提升写作能力。请严格按照JSON格式返回。每次生成题目时都要确保内容完全不同，不要重复。";

pub const EVALUATION_SYSTEM_PROMPT: &str = "你是一个专业的英语教学助手，专门帮助CET4学生提升写作能力。请严格按照JSON格式返回。";

pub const ASSISTANT_SYSTEM_PROMPT: &str = "你是一个友好的英语学习助手，专门帮助CET4学生解答英语学习问题（非作文批改类）。请用简洁、鼓励的语气回答。";

/// The canonical tagging rule, embedded verbatim in every evaluation prompt.
pub const FEEDBACK_TAGGING_RULE: &str = r#"details 中的每一项必须是一个对象：{"type": "...", "issue": "...", "correction": "..."}。
type 只能是以下三个标签之一：
- "Caution"：语法或词汇错误（时态、主谓一致、冠词、介词、拼写、用词错误）
- "Suggestion"：语法正确但表达可以更地道、更高级
- "Other"：以上两者都不是
issue 必须是用户答案中的原文片段，correction 是对应的修改建议。如果答案完全正确，details 为空数组 []。"#;

// ---------------------------------------------------------------------------
// Generation templates, one per mode. Placeholder: {weakness_context}.
// ---------------------------------------------------------------------------

pub const GEN_SENTENCE_CORRECTION: &str = r#"请生成一个CET4水平的病句题目。每次生成必须完全不同，不要重复之前的题目。
要求：
1. 句子长度15-25词
2. 包含常见的语法错误（如时态、主谓一致、冠词、介词等）
3. 错误要隐蔽但有迹可循
4. 内容要多样化，涵盖学习、生活、工作等不同场景

如果用户有薄弱点，请参考以下信息针对性地出题：
{weakness_context}

返回JSON格式：
{
    "question": "包含错误的句子",
    "error_type": "错误类型",
    "hint": "提示信息（不直接给出答案）"
}"#;

pub const GEN_TRANSLATION: &str = r#"请生成一个CET4水平的英译中题目。每次生成必须完全不同，不要重复之前的题目。
要求：
1. 中文句子表达常见场景（学习、生活、工作）
2. 包含2-3个重点词汇或短语
3. 适合CET4词汇水平
4. 场景要多样化，不要重复

如果用户有薄弱点，请参考以下信息针对性地出题：
{weakness_context}

返回JSON格式：
{
    "chinese_sentence": "中文句子",
    "key_words": ["重点词1", "重点词2"],
    "hint": "提示信息"
}"#;

pub const GEN_WORD_UPGRADING: &str = r#"请生成一个CET4水平的词汇升级题目。每次生成必须完全不同，不要重复之前的题目。
要求：
1. 给出一个基础词汇（如 good, bad, think 等）
2. 要求用户写出更高级的同义替换词
3. 适合CET4写作提升
4. 每次选择不同的基础词汇

如果用户有薄弱点，请参考以下信息针对性地出题：
{weakness_context}

返回JSON格式：
{
    "basic_word": "基础词汇",
    "word_meaning": "词义",
    "hint": "提示信息（如词性、语境等）"
}"#;

pub const GEN_LOGIC_LINKING: &str = r#"请生成一个CET4水平的逻辑连接题目。每次生成必须完全不同，不要重复之前的题目。
要求：
1. 给出两个相关的简单句
2. 要求用户用合适的连接词合并
3. 句子内容贴近学生生活
4. 场景要多样化，不要重复

如果用户有薄弱点，请参考以下信息针对性地出题：
{weakness_context}

返回JSON格式：
{
    "sentence1": "句子1",
    "sentence2": "句子2",
    "hint": "提示可能的连接词类型"
}"#;

pub const GEN_SENTENCE_COMBINING: &str = r#"请生成一个CET4水平的句子合并题目。每次生成必须完全不同，不要重复之前的题目。
要求：
1. 给出2-3个简单短句
2. 要求学生合并成一个复合句
3. 包含定语从句、状语从句等CET4句型
4. 场景要多样化，不要重复

如果用户有薄弱点，请参考以下信息针对性地出题：
{weakness_context}

返回JSON格式：
{
    "sentences": ["句子1", "句子2", "句子3（可选）"],
    "target_structure": "目标句型（如定语从句）",
    "hint": "提示信息"
}"#;

pub const GEN_PARAPHRASING: &str = r#"请生成一个CET4水平的改写题目。每次生成必须完全不同，不要重复之前的题目。
要求：
1. 给出一个表达清晰的句子
2. 要求学生换一种方式表达相同意思
3. 使用不同的词汇或句式
4. 句子内容要多样化，不要重复

如果用户有薄弱点，请参考以下信息针对性地出题：
{weakness_context}

返回JSON格式：
{
    "original_sentence": "原句",
    "hint": "提示信息（如可以使用的同义词或句型）"
}"#;

pub const GEN_BRAINSTORMING: &str = r#"请生成一个CET4水平的头脑风暴题目。每次生成必须完全不同，不要重复之前的题目。
要求：
1. 给出一个常见的话题（如环保、学习、健康等）
2. 要求学生列出3个相关论点
3. 适合写作练习
4. 话题要多样化，不要重复

如果用户有薄弱点，请参考以下信息针对性地出题：
{weakness_context}

返回JSON格式：
{
    "topic": "话题",
    "topic_background": "话题背景说明",
    "hint": "提示可能的思考角度"
}"#;

// ---------------------------------------------------------------------------
// Evaluation templates, one per mode. Placeholders: the mode's question
// fields, {user_answer}, and {tagging_rule}.
// ---------------------------------------------------------------------------

pub const EVAL_SENTENCE_CORRECTION: &str = r#"请批改以下句子改写题目。

原句（包含错误）：{question}
错误类型：{error_type}
用户答案：{user_answer}

你是我同桌，用轻松亲切的口吻批改，多鼓励。给出正确答案和高分表达。
{tagging_rule}

返回JSON格式：
{
    "summary": "整体评价",
    "is_correct": true/false,
    "correct_answer": "正确答案",
    "high_score_expression": "高分表达",
    "details": []
}"#;

pub const EVAL_TRANSLATION: &str = r#"请批改以下翻译题目。

中文句子：{chinese_sentence}
重点词汇：{key_words}
用户答案：{user_answer}

你是我同桌，用轻松亲切的口吻批改，多鼓励。给出参考译文和高分表达。
{tagging_rule}

返回JSON格式：
{
    "summary": "整体评价",
    "is_correct": true/false,
    "reference_translation": "参考译文",
    "high_score_expression": "高分表达",
    "details": []
}"#;

pub const EVAL_WORD_UPGRADING: &str = r#"请批改以下词汇升级题目。

基础词汇：{basic_word}
词义：{word_meaning}
用户答案：{user_answer}

你是我同桌，用轻松亲切的口吻批改，多鼓励。给出更多高级同义词和使用示例。
{tagging_rule}

返回JSON格式：
{
    "summary": "整体评价",
    "is_correct": true/false,
    "suggested_words": ["高级词1", "高级词2"],
    "high_score_expression": "使用示例",
    "details": []
}"#;

pub const EVAL_LOGIC_LINKING: &str = r#"请批改以下逻辑连接题目。

句子1：{sentence1}
句子2：{sentence2}
用户答案：{user_answer}

你是我同桌，用轻松亲切的口吻批改，多鼓励。给出参考答案和更多连接词选择。
{tagging_rule}

返回JSON格式：
{
    "summary": "整体评价",
    "is_correct": true/false,
    "reference_sentence": "参考答案",
    "high_score_expression": "更多连接词",
    "details": []
}"#;

pub const EVAL_SENTENCE_COMBINING: &str = r#"请批改以下句子合并题目。

原句：{sentences}
目标句型：{target_structure}
用户答案：{user_answer}

你是我同桌，用轻松亲切的口吻批改，多鼓励。给出参考答案和其他合并方式。
{tagging_rule}

返回JSON格式：
{
    "summary": "整体评价",
    "is_correct": true/false,
    "reference_answer": "参考答案",
    "high_score_expression": "其他方式",
    "details": []
}"#;

pub const EVAL_PARAPHRASING: &str = r#"请批改以下改写题目。

原句：{original_sentence}
用户答案：{user_answer}

你是我同桌，用轻松亲切的口吻批改，多鼓励。给出参考改写和更好的改写方式。
{tagging_rule}

返回JSON格式：
{
    "summary": "整体评价",
    "is_correct": true/false,
    "reference_paraphrase": "参考改写",
    "high_score_expression": "更好的方式",
    "details": []
}"#;

pub const EVAL_BRAINSTORMING: &str = r#"请批改以下头脑风暴题目。

话题：{topic}
用户答案：{user_answer}

你是我同桌，用轻松亲切的口吻批改，多鼓励。给出更多论点建议和高分论点示例。
{tagging_rule}

返回JSON格式：
{
    "summary": "整体评价",
    "is_correct": true/false,
    "suggested_points": ["论点1", "论点2"],
    "high_score_expression": "高分论点",
    "details": []
}"#;
