//! The workbench color map: every VS Code UI color key this generator
//! emits, each tied to a token resolution and optional transform.
//!
//! This is mechanical data entry over a fixed external vocabulary of
//! key strings; the interesting logic lives in [`Palette`].

use serde_json::{Map, Value};

use super::Palette;

fn lit(color: &str) -> Option<String> {
    Some(color.to_string())
}

/// Build the `colors` map for one (theme, scheme) pair.
///
/// Entries whose token does not resolve are omitted.
pub fn colors(p: &Palette<'_>) -> Map<String, Value> {
    let mut map = Map::new();
    let mut put = |key: &str, value: Option<String>| {
        if let Some(v) = value {
            map.insert(key.to_string(), Value::String(v));
        }
    };

    // base
    put("focusBorder", p.value("accent"));
    put("foreground", p.value("text"));
    put("widget.border", p.alpha("overlay", "10"));
    put("widget.shadow", p.alpha_d("shadow", "26", "b3"));
    put("selection.background", p.alpha("overlay", "40"));
    put("descriptionForeground", p.value("subtext"));
    put("errorForeground", p.value("error"));
    put("icon.foreground", p.value("text"));
    put("sash.hoverBorder", p.value("accent"));

    // text
    put("textBlockQuote.background", p.shift("background", 12));
    put("textBlockQuote.border", p.none());
    put("textCodeBlock.background", p.shift("background", 12));
    put("textLink.activeForeground", p.shift("accent", 24));
    put("textLink.foreground", p.value("accent"));
    put("textPreformat.foreground", p.value("text"));
    put("textPreformat.background", p.shift("background", 12));
    put("textSeparator.foreground", p.shift("subdued", 12));

    // actions
    put("toolbar.hoverBackground", p.alpha("overlay", "10"));
    put("toolbar.hoverOutline", p.none());
    put("toolbar.activeBackground", p.alpha("overlay", "20"));

    // button & checkbox
    put("button.background", p.value("accent"));
    put("button.foreground", lit("#ffffff"));
    put("button.border", p.none());
    put("button.separator", p.alpha("overlay", "20"));
    put("button.hoverBackground", p.shift("accent", 12));
    put("button.secondaryForeground", lit("#ffffff"));
    put("button.secondaryBackground", p.value("subdued"));
    put("button.secondaryHoverBackground", p.shift("subdued", 12));
    put("checkbox.background", p.shift("background", 24));
    put("checkbox.foreground", p.value("text"));
    put("checkbox.border", p.none());
    put("checkbox.selectBackground", p.shift("background", 24));
    put("checkbox.selectBorder", p.none());

    // dropdown
    put("dropdown.background", p.shift("background", 24));
    put("dropdown.listBackground", p.shift("background", 24));
    put("dropdown.border", p.alpha("overlay", "10"));
    put("dropdown.foreground", p.value("text"));

    // input
    put("input.background", p.shift("background", 24));
    put("input.border", p.alpha("overlay", "10"));
    put("input.foreground", p.value("text"));
    put("input.placeholderForeground", p.alpha("text", "66"));
    put("inputOption.activeBackground", p.alpha("overlay", "20"));
    put("inputOption.activeBorder", p.value("overlay"));
    put("inputOption.activeForeground", p.value("text"));
    put("inputOption.hoverBackground", p.alpha("overlay", "10"));
    put("inputValidation.errorBackground", p.shift_d("error", 60, -156));
    put("inputValidation.errorForeground", lit("#ffffff"));
    put("inputValidation.errorBorder", p.value("error"));
    put("inputValidation.infoBackground", p.shift_d("accent", 60, -156));
    put("inputValidation.infoForeground", lit("#ffffff"));
    put("inputValidation.infoBorder", p.value("accent"));
    put("inputValidation.warningBackground", p.shift_d("warning", 60, -156));
    put("inputValidation.warningForeground", lit("#ffffff"));
    put("inputValidation.warningBorder", p.value("warning"));

    // scrollbar
    put("scrollbar.shadow", p.alpha_d("shadow", "26", "b3"));
    put("scrollbarSlider.activeBackground", p.alpha("overlay", "40"));
    put("scrollbarSlider.background", p.alpha("overlay", "10"));
    put("scrollbarSlider.hoverBackground", p.alpha("overlay", "20"));

    // badge & progress bar
    put("badge.foreground", lit("#ffffff"));
    put("badge.background", p.value("accent"));
    put("progressBar.background", p.value("accent"));

    // lists and trees
    put("list.activeSelectionBackground", p.alpha("overlay", "20"));
    put("list.activeSelectionForeground", p.value("text"));
    put("list.activeSelectionIconForeground", p.value("text"));
    put("list.dropBackground", p.alpha("accent", "40"));
    put("list.focusBackground", p.alpha("overlay", "10"));
    put("list.focusForeground", p.value("text"));
    put("list.focusHighlightForeground", p.value("text"));
    put("list.focusOutline", p.none());
    put("list.focusAndSelectionOutline", p.value("accent"));
    put("list.highlightForeground", p.value("text"));
    put("list.hoverBackground", p.alpha("overlay", "10"));
    put("list.hoverForeground", p.value("text"));
    put("list.inactiveSelectionBackground", p.alpha("overlay", "10"));
    put("list.inactiveSelectionForeground", p.value("text"));
    put("list.inactiveSelectionIconForeground", p.value("text"));
    put("list.inactiveFocusBackground", p.alpha("overlay", "10"));
    put("list.inactiveFocusOutline", p.none());
    put("list.invalidItemForeground", p.value("error"));
    put("list.errorForeground", p.value("error"));
    put("list.warningForeground", p.value("warning"));
    put("listFilterWidget.background", p.value("background"));
    put("listFilterWidget.outline", p.none());
    put("listFilterWidget.noMatchesOutline", p.none());
    put("listFilterWidget.shadow", p.alpha_d("shadow", "26", "b3"));
    put("list.filterMatchBackground", p.alpha("accent", "99"));
    put("list.filterMatchBorder", p.none());
    put("list.dropBetweenBackground", p.alpha("accent", "40"));
    put("tree.indentGuidesStroke", p.alpha("overlay", "20"));
    put("tree.inactiveIndentGuidesStroke", p.alpha("overlay", "10"));

    // activity bar
    put("activityBar.background", p.value("background"));
    put("activityBar.dropBorder", p.value("overlay"));
    put("activityBar.foreground", p.value("text"));
    put("activityBar.inactiveForeground", p.alpha_d("text", "66", "99"));
    put("activityBar.border", p.value("background"));
    put("activityBarBadge.background", p.value("accent"));
    put("activityBarBadge.foreground", lit("#ffffff"));
    put("activityBar.activeBorder", p.value("accent"));
    put("activityBar.activeBackground", p.none());
    put("activityBar.activeFocusBorder", p.value("accent"));
    put("activityBarTop.foreground", p.value("text"));
    put("activityBarTop.activeBorder", p.value("accent"));
    put("activityBarTop.inactiveForeground", p.alpha("text", "99"));
    put("activityBarTop.dropBorder", p.value("overlay"));

    // side bar
    put("sideBar.background", p.shift_d("background", 12, 6));
    put("sideBar.foreground", p.value("text"));
    put("sideBar.border", p.value("background"));
    put("sideBar.dropBackground", p.alpha("accent", "40"));
    put("sideBarTitle.foreground", p.value("text"));
    put("sideBarSectionHeader.background", p.shift_d("background", 12, 6));
    put("sideBarSectionHeader.foreground", p.value("text"));
    put("sideBarSectionHeader.border", p.value("background"));

    // minimap
    put("minimap.findMatchHighlight", p.value("accent"));
    put("minimap.selectionHighlight", p.alpha("overlay", "66"));
    put("minimap.errorHighlight", p.alpha("error", "66"));
    put("minimap.warningHighlight", p.alpha("warning", "66"));
    put("minimap.background", p.value("background"));
    put("minimap.selectionOccurrenceHighlight", p.alpha("overlay", "66"));
    put("minimap.foregroundOpacity", lit("#000000cc"));
    put("minimap.infoHighlight", p.alpha("accent", "66"));
    put("minimapSlider.background", p.alpha("overlay", "10"));
    put("minimapSlider.hoverBackground", p.alpha("overlay", "20"));
    put("minimapSlider.activeBackground", p.alpha("overlay", "40"));
    put("minimapGutter.addedBackground", p.value("accent"));
    put("minimapGutter.modifiedBackground", p.alpha_d("accent", "99", "80"));
    put("minimapGutter.deletedBackground", p.value("error"));

    // editor groups & tabs
    put("editorGroup.border", p.alpha("overlay", "20"));
    put("editorGroup.dropBackground", p.alpha("accent", "40"));
    put("editorGroupHeader.noTabsBackground", p.value("background"));
    put("editorGroupHeader.tabsBackground", p.shift_d("background", 12, 6));
    put("editorGroupHeader.tabsBorder", p.value("background"));
    put("editorGroupHeader.border", p.none());
    put("editorGroup.emptyBackground", p.value("background"));
    put("editorGroup.focusedEmptyBorder", p.value("accent"));
    put("editorGroup.dropIntoPromptForeground", p.value("text"));
    put("editorGroup.dropIntoPromptBackground", p.value("accent"));
    put("editorGroup.dropIntoPromptBorder", p.none());
    put("tab.activeBackground", p.value("background"));
    put("tab.unfocusedActiveBackground", p.value("background"));
    put("tab.activeForeground", p.value("text"));
    put("tab.border", p.value("background"));
    put("tab.activeBorder", p.none());
    put("tab.dragAndDropBorder", p.value("accent"));
    put("tab.unfocusedActiveBorder", p.none());
    put("tab.activeBorderTop", p.value("accent"));
    put("tab.unfocusedActiveBorderTop", p.value("accent"));
    put("tab.lastPinnedBorder", p.none());
    put("tab.inactiveBackground", p.shift_d("background", 12, 6));
    put("tab.unfocusedInactiveBackground", p.shift_d("background", 12, 6));
    put("tab.inactiveForeground", p.alpha("text", "b3"));
    put("tab.unfocusedActiveForeground", p.value("text"));
    put("tab.unfocusedInactiveForeground", p.alpha("text", "b3"));
    put("tab.hoverBackground", p.value("background"));
    put("tab.unfocusedHoverBackground", p.value("background"));
    put("tab.hoverForeground", p.value("text"));
    put("tab.unfocusedHoverForeground", p.alpha("text", "b3"));
    put("tab.hoverBorder", p.none());
    put("tab.unfocusedHoverBorder", p.none());
    put("tab.activeModifiedBorder", p.value("overlay"));
    put("tab.inactiveModifiedBorder", p.none());
    put("tab.unfocusedActiveModifiedBorder", p.value("overlay"));
    put("tab.unfocusedInactiveModifiedBorder", p.none());
    put("editorPane.background", p.value("background"));
    put("sideBySideEditor.horizontalBorder", p.alpha("overlay", "20"));
    put("sideBySideEditor.verticalBorder", p.alpha("overlay", "20"));

    // editor
    put("editor.background", p.value("background"));
    put("editor.foreground", p.value("text"));
    put("editorLineNumber.foreground", p.alpha("text", "33"));
    put("editorLineNumber.activeForeground", p.value("text"));
    put("editorCursor.background", p.value("background"));
    put("editorCursor.foreground", p.value("overlay"));
    put("editor.selectionBackground", p.alpha("overlay", "40"));
    put("editor.selectionForeground", p.value("text"));
    put("editor.inactiveSelectionBackground", p.alpha("overlay", "40"));
    put("editor.selectionHighlightBackground", p.none());
    put("editor.selectionHighlightBorder", p.value("overlay"));
    put("editor.wordHighlightBackground", p.alpha("overlay", "20"));
    put("editor.wordHighlightBorder", p.none());
    put("editor.wordHighlightStrongBackground", p.alpha("overlay", "20"));
    put("editor.wordHighlightStrongBorder", p.none());
    put("editor.wordHighlightTextBackground", p.alpha("overlay", "1a"));
    put("editor.wordHighlightTextBorder", p.none());
    put("editor.findMatchBackground", p.alpha("accent", "99"));
    put("editor.findMatchHighlightBackground", p.alpha("accent", "4d"));
    put("editor.findRangeHighlightBackground", p.alpha("accent", "4d"));
    put("editor.findMatchBorder", p.none());
    put("editor.findMatchHighlightBorder", p.none());
    put("editor.findRangeHighlightBorder", p.none());
    put("search.resultsInfoForeground", p.value("text"));
    put("searchEditor.findMatchBackground", p.alpha("accent", "99"));
    put("searchEditor.findMatchBorder", p.none());
    put("searchEditor.textInputBorder", p.alpha("overlay", "10"));
    put("editor.hoverHighlightBackground", p.alpha("overlay", "20"));
    put("editor.lineHighlightBackground", p.alpha("overlay", "10"));
    put("editor.lineHighlightBorder", p.none());
    put("editorWatermark.foreground", p.alpha("text", "99"));
    put("editorUnicodeHighlight.border", p.none());
    put("editorUnicodeHighlight.background", p.none());
    put("editorLink.activeForeground", p.value("accent"));
    put("editor.rangeHighlightBackground", p.alpha("accent", "4d"));
    put("editor.rangeHighlightBorder", p.none());
    put("editor.symbolHighlightBackground", p.alpha("accent", "4d"));
    put("editor.symbolHighlightBorder", p.none());
    put("editorWhitespace.foreground", p.alpha("overlay", "33"));
    put("editorIndentGuide.background", p.alpha("overlay", "10"));
    put("editorIndentGuide.activeBackground", p.alpha("accent", "40"));
    put("editorInlayHint.background", p.alpha("overlay", "20"));
    put("editorInlayHint.foreground", p.value("text"));
    put("editorInlayHint.typeForeground", p.value("text"));
    put("editorInlayHint.typeBackground", p.alpha("overlay", "20"));
    put("editorInlayHint.parameterForeground", p.value("text"));
    put("editorInlayHint.parameterBackground", p.alpha("overlay", "20"));
    put("editorRuler.foreground", p.alpha("overlay", "40"));
    put("editor.linkedEditingBackground", p.value("background"));
    put("editorCodeLens.foreground", p.value("subtext"));
    put("editorLightBulb.foreground", p.value("text"));
    put("editorLightBulbAutoFix.foreground", p.value("text"));
    put("editorLightBulbAi.foreground", p.value("text"));
    put("editorBracketMatch.background", p.none());
    put("editorBracketMatch.border", p.value("accent"));
    put("editorBracketHighlight.foreground1", p.value("text"));
    put("editorBracketHighlight.foreground2", p.value("text"));
    put("editorBracketHighlight.foreground3", p.value("text"));
    put("editorBracketHighlight.foreground4", p.value("text"));
    put("editorBracketHighlight.foreground5", p.value("text"));
    put("editorBracketHighlight.foreground6", p.value("text"));
    put("editorBracketHighlight.unexpectedBracket.foreground", p.value("error"));
    put("editorBracketPairGuide.activeBackground1", p.alpha("accent", "40"));
    put("editorBracketPairGuide.activeBackground2", p.alpha("accent", "40"));
    put("editorBracketPairGuide.activeBackground3", p.alpha("accent", "40"));
    put("editorBracketPairGuide.activeBackground4", p.alpha("accent", "40"));
    put("editorBracketPairGuide.activeBackground5", p.alpha("accent", "40"));
    put("editorBracketPairGuide.activeBackground6", p.alpha("accent", "40"));
    put("editorBracketPairGuide.background1", p.alpha("overlay", "10"));
    put("editorBracketPairGuide.background2", p.alpha("overlay", "10"));
    put("editorBracketPairGuide.background3", p.alpha("overlay", "10"));
    put("editorBracketPairGuide.background4", p.alpha("overlay", "10"));
    put("editorBracketPairGuide.background5", p.alpha("overlay", "10"));
    put("editorBracketPairGuide.background6", p.alpha("overlay", "10"));
    put("editor.foldBackground", p.alpha("overlay", "05"));
    put("editorOverviewRuler.background", p.value("background"));
    put("editorOverviewRuler.border", p.alpha("overlay", "20"));
    put("editorOverviewRuler.findMatchForeground", p.value("accent"));
    put("editorOverviewRuler.rangeHighlightForeground", p.value("overlay"));
    put("editorOverviewRuler.selectionHighlightForeground", p.value("overlay"));
    put("editorOverviewRuler.wordHighlightForeground", p.value("overlay"));
    put("editorOverviewRuler.wordHighlightStrongForeground", p.value("overlay"));
    put("editorOverviewRuler.wordHighlightTextForeground", p.value("overlay"));
    put("editorOverviewRuler.modifiedForeground", p.alpha_d("accent", "99", "80"));
    put("editorOverviewRuler.addedForeground", p.value("accent"));
    put("editorOverviewRuler.deletedForeground", p.value("error"));
    put("editorOverviewRuler.errorForeground", p.value("error"));
    put("editorOverviewRuler.warningForeground", p.value("warning"));
    put("editorOverviewRuler.infoForeground", p.value("accent"));
    put("editorOverviewRuler.bracketMatchForeground", p.none());
    put("editorOverviewRuler.inlineChatInserted", p.none());
    put("editorOverviewRuler.inlineChatRemoved", p.none());
    put("editorError.foreground", p.value("error"));
    put("editorError.border", p.none());
    put("editorError.background", p.none());
    put("editorWarning.foreground", p.value("warning"));
    put("editorWarning.border", p.none());
    put("editorWarning.background", p.none());
    put("editorInfo.foreground", p.value("accent"));
    put("editorInfo.border", p.none());
    put("editorInfo.background", p.none());
    put("editorHint.foreground", p.none());
    put("editorHint.border", p.alpha("accent", "40"));
    put("problemsErrorIcon.foreground", p.value("error"));
    put("problemsWarningIcon.foreground", p.value("warning"));
    put("problemsInfoIcon.foreground", p.value("accent"));
    put("editorUnnecessaryCode.border", p.none());
    put("editorUnnecessaryCode.opacity", lit("#00000066"));
    put("editorGutter.background", p.value("background"));
    put("editorGutter.modifiedBackground", p.alpha_d("accent", "99", "80"));
    put("editorGutter.addedBackground", p.value("accent"));
    put("editorGutter.deletedBackground", p.value("error"));
    put("editorGutter.foldingControlForeground", p.value("overlay"));

    // diff editor
    put("diffEditor.insertedTextBackground", p.alpha("accent", "66"));
    put("diffEditor.insertedTextBorder", p.none());
    put("diffEditor.removedTextBackground", p.alpha("error", "66"));
    put("diffEditor.removedTextBorder", p.none());
    put("diffEditor.border", p.alpha("overlay", "20"));
    put("diffEditor.insertedLineBackground", p.alpha("accent", "33"));
    put("diffEditor.removedLineBackground", p.alpha("error", "33"));

    // editor widgets
    put("editorWidget.foreground", p.value("text"));
    put("editorWidget.background", p.shift_d("background", 12, 6));
    put("editorWidget.border", p.alpha("overlay", "10"));
    put("editorWidget.resizeBorder", p.value("overlay"));
    put("editorSuggestWidget.foreground", p.value("text"));
    put("editorSuggestWidget.selectedBackground", p.alpha("overlay", "20"));
    put("editorStickyScroll.shadow", p.alpha_d("shadow", "26", "b3"));
    put("editorStickyScrollHover.background", p.alpha("overlay", "10"));

    // peek view
    put("peekView.border", p.value("accent"));
    put("peekViewEditor.background", p.value("background"));
    put("peekViewEditorGutter.background", p.value("background"));
    put("peekViewTitle.background", p.value("background"));
    put("peekViewTitleDescription.foreground", p.value("subtext"));
    put("peekViewTitleLabel.foreground", p.value("text"));
    put("peekViewEditorStickyScroll.background", p.value("background"));

    // merge conflicts
    put("merge.currentHeaderBackground", p.shift_alpha("accent", 32, "b3"));
    put("merge.currentContentBackground", p.shift_alpha("accent", 32, "33"));
    put("merge.incomingHeaderBackground", p.shift_alpha("accent", -32, "b3"));
    put("merge.incomingContentBackground", p.shift_alpha("accent", -32, "33"));
    put("merge.border", p.none());
    put("merge.commonContentBackground", p.shift_alpha("background", 32, "33"));
    put("merge.commonHeaderBackground", p.shift_alpha("background", 32, "b3"));
    put("editorOverviewRuler.currentContentForeground", p.shift("accent", 32));
    put("editorOverviewRuler.incomingContentForeground", p.shift("accent", -32));
    put("editorOverviewRuler.commonContentForeground", p.shift("background", 32));
    put("editorOverviewRuler.commentForeground", p.none());
    put("editorOverviewRuler.commentUnresolvedForeground", p.none());

    // panel
    put("panel.background", p.value("background"));
    put("panel.border", p.alpha("overlay", "20"));
    put("panel.dropBorder", p.value("overlay"));
    put("panelTitle.activeBorder", p.value("accent"));
    put("panelTitle.activeForeground", p.value("text"));
    put("panelTitle.inactiveForeground", p.alpha("overlay", "cc"));
    put("panelInput.border", p.alpha("overlay", "10"));
    put("panelSection.border", p.alpha("overlay", "20"));
    put("panelSection.dropBackground", p.alpha("accent", "40"));
    put("panelSectionHeader.background", p.value("background"));
    put("panelSectionHeader.foreground", p.value("text"));
    put("panelSectionHeader.border", p.value("background"));
    put("outputView.background", p.value("background"));
    put("outputViewStickyScroll.background", p.value("background"));

    // status bar
    put("statusBar.background", p.value("accent"));
    put("statusBar.foreground", lit("#ffffff"));
    put("statusBar.border", p.none());
    put("statusBar.debuggingBackground", p.value("debug"));
    put("statusBar.debuggingForeground", lit("#ffffff"));
    put("statusBar.debuggingBorder", p.none());
    put("statusBar.noFolderForeground", p.value("text"));
    put("statusBar.noFolderBackground", p.value("background"));
    put("statusBar.noFolderBorder", p.none());
    put("statusBarItem.activeBackground", p.alpha("overlay", "33"));
    put("statusBarItem.hoverForeground", p.value("text"));
    put("statusBarItem.hoverBackground", p.alpha("overlay", "20"));
    put("statusBarItem.prominentForeground", p.value("text"));
    put("statusBarItem.prominentBackground", p.none());
    put("statusBarItem.prominentHoverForeground", p.value("text"));
    put("statusBarItem.prominentHoverBackground", p.alpha("overlay", "20"));
    put("statusBarItem.remoteBackground", p.none());
    put("statusBarItem.remoteForeground", lit("#ffffff"));
    put("statusBarItem.remoteHoverBackground", p.alpha("overlay", "20"));
    put("statusBarItem.remoteHoverForeground", p.value("text"));
    put("statusBarItem.errorBackground", p.none());
    put("statusBarItem.errorForeground", p.value("text"));
    put("statusBarItem.errorHoverBackground", p.alpha("overlay", "20"));
    put("statusBarItem.errorHoverForeground", p.value("text"));
    put("statusBarItem.warningBackground", p.none());
    put("statusBarItem.warningForeground", p.value("text"));
    put("statusBarItem.warningHoverBackground", p.alpha("overlay", "20"));
    put("statusBarItem.warningHoverForeground", p.value("text"));
    put("statusBarItem.compactHoverBackground", p.alpha("overlay", "20"));
    put("statusBarItem.focusBorder", p.none());
    put("statusBar.focusBorder", p.none());
    put("statusBarItem.offlineBackground", p.none());
    put("statusBarItem.offlineForeground", p.value("text"));
    put("statusBarItem.offlineHoverForeground", p.value("text"));
    put("statusBarItem.offlineHoverBackground", p.alpha("overlay", "10"));

    // title bar
    put("titleBar.activeBackground", p.value("background"));
    put("titleBar.activeForeground", p.value("text"));
    put("titleBar.inactiveBackground", p.value("background"));
    put("titleBar.inactiveForeground", p.alpha("text", "b3"));
    put("titleBar.border", p.none());

    // notifications
    put("notificationCenter.border", p.alpha("overlay", "10"));
    put("notificationCenterHeader.foreground", p.value("text"));
    put("notificationCenterHeader.background", p.value("background"));
    put("notificationToast.border", p.alpha("overlay", "10"));
    put("notifications.foreground", p.value("text"));
    put("notifications.background", p.value("background"));
    put("notifications.border", p.alpha("overlay", "10"));
    put("notificationLink.foreground", p.value("accent"));
    put("notificationsErrorIcon.foreground", p.value("error"));
    put("notificationsWarningIcon.foreground", p.value("warning"));
    put("notificationsInfoIcon.foreground", p.value("accent"));

    // banner
    put("banner.background", p.value("accent"));
    put("banner.foreground", lit("#ffffff"));
    put("banner.iconForeground", lit("#ffffff"));

    // extensions
    put("extensionIcon.starForeground", p.shift("accent", 24));
    put("extensionIcon.verifiedForeground", p.shift("accent", 24));

    // quick picker
    put("pickerGroup.border", p.alpha("overlay", "10"));
    put("pickerGroup.foreground", p.value("text"));
    put("quickInput.background", p.shift_d("background", 12, 6));
    put("quickInput.foreground", p.value("text"));
    put("quickInputList.focusBackground", p.shift_d("background", 12, 6));
    put("quickInputList.focusForeground", p.value("text"));
    put("quickInputList.focusIconForeground", p.value("text"));
    put("quickInputTitle.background", p.shift_d("background", 12, 6));

    // keybinding labels
    put("keybindingLabel.background", p.alpha("text", "10"));
    put("keybindingLabel.foreground", p.value("text"));
    put("keybindingLabel.border", p.alpha("text", "99"));
    put("keybindingLabel.bottomBorder", p.alpha("text", "99"));

    // integrated terminal
    put("terminal.background", p.value("background"));
    put("terminal.border", p.none());
    put("terminal.foreground", p.value("text"));
    put("terminal.selectionBackground", p.alpha("overlay", "40"));
    put("terminal.selectionForeground", p.value("text"));
    put("terminal.inactiveSelectionBackground", p.none());
    put("terminal.findMatchBackground", p.alpha("accent", "99"));
    put("terminal.findMatchBorder", p.none());
    put("terminal.findMatchHighlightBackground", p.alpha("accent", "4d"));
    put("terminal.findMatchHighlightBorder", p.none());
    put("terminal.hoverHighlightBackground", p.alpha("overlay", "20"));
    put("terminalCursor.background", p.value("background"));
    put("terminalCursor.foreground", p.value("overlay"));
    put("terminal.dropBackground", p.alpha("accent", "40"));
    put("terminal.tab.activeBorder", p.value("accent"));
    put("terminalCommandDecoration.defaultBackground", p.alpha("overlay", "80"));
    put("terminalCommandDecoration.successBackground", p.value("accent"));
    put("terminalCommandDecoration.errorBackground", p.value("error"));

    // debug
    put("debugToolBar.background", p.shift_d("background", 12, 6));
    put("debugToolBar.border", p.alpha("overlay", "10"));

    // git decorations
    put("gitDecoration.addedResourceForeground", p.shift("added", -20));
    put("gitDecoration.modifiedResourceForeground", p.shift("added", 40));
    put("gitDecoration.deletedResourceForeground", p.shift("deleted", 20));
    put("gitDecoration.renamedResourceForeground", p.shift("untracked", 40));
    put("gitDecoration.stageModifiedResourceForeground", p.shift("added", -20));
    put("gitDecoration.stageDeletedResourceForeground", p.shift("deleted", -10));
    put("gitDecoration.untrackedResourceForeground", p.shift("untracked", 40));
    put("gitDecoration.ignoredResourceForeground", p.alpha_d("text", "80", "66"));
    put("gitDecoration.conflictingResourceForeground", p.shift("added", 80));
    put("gitDecoration.submoduleResourceForeground", p.value("text"));

    // settings editor
    put("settings.modifiedItemIndicator", p.value("accent"));

    // breadcrumbs
    put("breadcrumb.foreground", p.alpha("text", "b3"));
    put("breadcrumb.background", p.value("background"));
    put("breadcrumb.focusForeground", p.value("text"));
    put("breadcrumb.activeSelectionForeground", p.value("text"));
    put("breadcrumbPicker.background", p.shift_d("background", 12, 6));

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Scheme;
    use crate::store::TokenStore;

    fn palette_store() -> TokenStore {
        TokenStore::parse(
            b"background #ffffff\n\
              background.d #16161e\n\
              text #24292f\n\
              text.d #c9d1d9\n\
              accent #0969da\n\
              accent.d #58a6ff\n\
              overlay #6e7781\n\
              overlay.d #8b949e\n",
        )
        .unwrap()
    }

    #[test]
    fn plain_tokens_pass_through() {
        let store = palette_store();
        let p = Palette::new(&store, "any", Scheme::Light);
        let colors = colors(&p);
        assert_eq!(colors["editor.background"], "#ffffff");
        assert_eq!(colors["focusBorder"], "#0969da");
        assert_eq!(colors["button.foreground"], "#ffffff");
    }

    #[test]
    fn unresolved_tokens_are_omitted() {
        let store = palette_store();
        let p = Palette::new(&store, "any", Scheme::Light);
        let colors = colors(&p);
        // No "error" token defined: the whole entry is absent, not null.
        assert!(!colors.contains_key("errorForeground"));
        assert!(!colors.contains_key("editorError.foreground"));
    }

    #[test]
    fn brightness_follows_scheme() {
        let store = palette_store();

        let light = colors(&Palette::new(&store, "any", Scheme::Light));
        // Light darkens: #ffffff shifted by 12 -> #f3f3f3.
        assert_eq!(light["textBlockQuote.background"], "#f3f3f3");
        // sideBar uses the 12/6 pair: light -> -12.
        assert_eq!(light["sideBar.background"], "#f3f3f3");

        let dark = colors(&Palette::new(&store, "any", Scheme::Dark));
        // Dark lightens #16161e by the explicit 6.
        assert_eq!(dark["sideBar.background"], "#1c1c24");
    }

    #[test]
    fn transparent_placeholder_uses_background() {
        let store = palette_store();
        let light = colors(&Palette::new(&store, "any", Scheme::Light));
        assert_eq!(light["tab.activeBorder"], "#ffffff00");
        let dark = colors(&Palette::new(&store, "any", Scheme::Dark));
        assert_eq!(dark["tab.activeBorder"], "#16161e00");
    }
}
