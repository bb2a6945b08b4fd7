// Support level resolution
// Collapses one IDE's stages into the single cell shown in the matrix.

use crate::models::{ResolvedCell, StageSet, TooltipLine};
use crate::utils::display_stage_date;

/// Resolve one IDE's stage data into a display cell.
///
/// The present stage with the highest precedence (ga > preview > private_preview)
/// supplies the class, version and url. The tooltip lists every present stage
/// in fixed order, whichever one won.
pub fn resolve(stages: &StageSet) -> ResolvedCell {
    let Some((top, entry)) = stages.present().max_by_key(|(stage, _)| stage.precedence()) else {
        return ResolvedCell::na();
    };

    let tooltip = stages
        .present()
        .map(|(stage, entry)| TooltipLine {
            stage,
            label: stage.label(),
            version: entry.version.clone(),
            formatted_date: display_stage_date(&entry.date),
        })
        .collect();

    ResolvedCell {
        display_class: top.display_class(),
        version: entry.version.clone(),
        url: entry.link().map(str::to_string),
        tooltip,
    }
}

/// Resolve a possibly missing IDE entry; missing resolves to `na`
pub fn resolve_opt(stages: Option<&StageSet>) -> ResolvedCell {
    stages.map(resolve).unwrap_or_else(ResolvedCell::na)
}
