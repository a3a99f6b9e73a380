//! dialoguer による対話プロンプト

use super::{PromptRequest, Prompter, Selection};
use crate::error::{PhotoStatusError, Result};
use dialoguer::{MultiSelect, Select};
use photo_status_common::{StatusCatalog, Vocabulary};

/// 端末で画像ごとにステータスを選ばせる
///
/// 選択肢にはカタログの表示ラベルを使う。Esc / q で中断（保存しない）。
pub struct DialoguerPrompter<'a> {
    catalog: &'a StatusCatalog,
}

impl<'a> DialoguerPrompter<'a> {
    pub fn new(catalog: &'a StatusCatalog) -> Self {
        Self { catalog }
    }
}

impl Prompter for DialoguerPrompter<'_> {
    fn choose(&mut self, request: &PromptRequest<'_>) -> Result<Selection> {
        let (width, height) = request.preview.display_size();
        println!(
            "\n[{}/{}] {} ({}x{} → {}x{}){}",
            request.position,
            request.total,
            request.image.file_name,
            request.preview.width,
            request.preview.height,
            width,
            height,
            request
                .image
                .date
                .as_deref()
                .map(|d| format!(" 撮影: {}", d))
                .unwrap_or_default()
        );
        println!("  {}", request.image.path.display());

        let items: Vec<&str> = request
            .options
            .iter()
            .map(|label| self.catalog.display_for(label))
            .collect();

        let choice = Select::new()
            .with_prompt(format!("{} のステータス (Esc/q: 中断)", request.image.file_name))
            .items(&items)
            .default(request.default)
            .interact_opt()
            .map_err(|e| PhotoStatusError::Prompt(e.to_string()))?;

        Ok(match choice {
            Some(idx) => Selection::Selected(idx),
            None => Selection::Abandon,
        })
    }
}

/// 使用するステータスをカタログから複数選択（初期状態は全選択）
pub fn select_vocabulary(catalog: &StatusCatalog) -> Result<Vocabulary> {
    let items: Vec<&str> = catalog.entries().iter().map(|e| e.display.as_str()).collect();
    let defaults = vec![true; items.len()];

    let selected = MultiSelect::new()
        .with_prompt("使用するステータスを選択 (Space: 切替 / Enter: 決定)")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(|e| PhotoStatusError::Prompt(e.to_string()))?;

    Ok(catalog.vocabulary_from_selection(&selected)?)
}
