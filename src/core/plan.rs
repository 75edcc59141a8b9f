use crate::utils::error::{PlanError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_slug, validate_unique_ids, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanDocument {
    pub project: ProjectInfo,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub details: Option<String>,
}

impl PlanDocument {
    /// 載入並驗證計畫文件
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let plan = Self::from_file(path)?;
        plan.validate_plan()?;
        Ok(plan)
    }

    /// 從 TOML 檔案載入計畫文件
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析計畫文件
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlanError::ValidationError {
            field: "plan_toml_parsing".to_string(),
            message: format!("Plan TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PLAN_PROJECT_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證計畫文件的合理性
    pub fn validate_plan(&self) -> Result<()> {
        validate_non_empty_string("project.name", &self.project.name)?;
        validate_non_empty_string("project.description", &self.project.description)?;

        for (index, milestone) in self.milestones.iter().enumerate() {
            Self::validate_milestone(index, milestone)?;
        }

        // id 在整個序列中必須唯一
        validate_unique_ids(
            "milestones.id",
            self.milestones.iter().map(|m| m.id.as_str()),
        )?;

        Ok(())
    }

    fn validate_milestone(index: usize, milestone: &Milestone) -> Result<()> {
        validate_slug(&format!("milestones.{}.id", index), &milestone.id)?;
        validate_non_empty_string(&format!("milestones.{}.title", index), &milestone.title)?;
        validate_non_empty_string(
            &format!("milestones.{}.description", index),
            &milestone.description,
        )?;

        if let Some(details) = &milestone.details {
            validate_non_empty_string(&format!("milestones.{}.details", index), details)?;
        }

        Ok(())
    }

    /// 將計畫文件序列化為 JSON 字串
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(PlanError::SerializationError)
    }

    /// 獲取指定 id 的 Milestone
    pub fn get_milestone(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    /// 獲取所有 Milestone 的 id（按作者順序）
    pub fn milestone_ids(&self) -> Vec<&str> {
        self.milestones.iter().map(|m| m.id.as_str()).collect()
    }

    pub fn milestone_count(&self) -> usize {
        self.milestones.len()
    }

    pub fn project_name(&self) -> &str {
        &self.project.name
    }
}

impl Validate for PlanDocument {
    fn validate(&self) -> Result<()> {
        self.validate_plan()
    }
}
