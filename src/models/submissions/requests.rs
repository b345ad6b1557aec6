use serde::Deserialize;

// 学生提交请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSubmissionRequest {
    pub answer_sheet_url: Option<String>,
}

// 教师评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmissionRequest {
    pub marks_obtained: i32,
}
