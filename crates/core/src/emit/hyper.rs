//! Generated Hyper terminal configuration.
//!
//! The output is a `module.exports` JavaScript file: fixed typography
//! and shell settings, with every color slot filled from the token
//! store for the theme's dark variant. Slots whose token is undefined
//! keep a plain monochrome fallback.

use crate::color::Scheme;
use crate::store::TokenStore;

use super::Palette;

/// Render the Hyper config for the dark variant of `theme`.
pub fn hyper_config(store: &TokenStore, theme: &str) -> String {
    let p = Palette::new(store, theme, Scheme::Dark);
    let color = |token: &str, fallback: &str| p.value(token).unwrap_or_else(|| fallback.to_string());

    let background = color("background", "#000000");
    let text = color("text", "#ffffff");
    let cursor = color("overlay", "#ffffff");
    let selection = p
        .alpha("overlay", "40")
        .unwrap_or_else(|| "#ffffff40".to_string());
    let border = p.none().unwrap_or_else(|| "#00000000".to_string());

    let red = color("error", "#ff5555");
    let green = color("added", "#55ff55");
    let yellow = color("warning", "#ffff55");
    let blue = color("accent", "#5555ff");
    let magenta = color("code-1", "#ff55ff");
    let cyan = color("code-2", "#55ffff");

    format!(
        r#"// generated; edit the definition file instead
module.exports = {{
  config: {{
    updateChannel: 'stable',
    fontSize: 12.5,
    fontFamily: 'SF Mono',
    fontWeight: 'normal',
    fontWeightBold: 'bold',
    lineHeight: 1.075,
    letterSpacing: 0,
    cursorColor: '{cursor}',
    cursorAccentColor: '{background}',
    cursorShape: 'BLOCK',
    cursorBlink: true,
    foregroundColor: '{text}',
    backgroundColor: '{background}',
    selectionColor: '{selection}',
    borderColor: '{border}',
    css: '',
    termCSS: '',
    padding: '12px 16px',
    colors: {{
      red: '{red}',
      green: '{green}',
      yellow: '{yellow}',
      blue: '{blue}',
      magenta: '{magenta}',
      cyan: '{cyan}',
      white: '{text}',
      lightBlack: '{background}',
      lightRed: '{red}',
      lightGreen: '{green}',
      lightYellow: '{yellow}',
      lightBlue: '{blue}',
      lightMagenta: '{magenta}',
      lightCyan: '{cyan}',
      lightWhite: '{text}',
    }},
    shell: '/bin/zsh',
    shellArgs: ['--login'],
    env: {{}},
    bell: 'SOUND',
    copyOnSelect: false,
    defaultSSHApp: true,
    quickEdit: false,
    macOptionSelectionMode: 'vertical',
    webGLRenderer: true,
    disableLigatures: true,
    disableAutoUpdates: false,
    screenReaderMode: false,
    preserveCWD: true,
  }},
  plugins: [],
  localPlugins: [],
  keymaps: {{}},
}};
"#
    )
}
