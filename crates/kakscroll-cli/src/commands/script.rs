use anyhow::Result;

use kakscroll_core::AppConfig;

/// Print the integration script for the user's kakrc:
///
///     evaluate-commands %sh{ kakscroll script }
pub fn run() -> Result<()> {
    let config = AppConfig::load()?;
    print!("{}", render(&config));
    Ok(())
}

fn render(config: &AppConfig) -> String {
    let scroll = &config.scroll;
    format!(
        r#"# Generated by `kakscroll script`

define-command -hidden kakscroll-launch -params 4 -docstring %{{
    kakscroll-launch <direction> <half> <duration-ms> <speed>: animate one scroll
}} %{{
    evaluate-commands %sh{{
        # kak_session kak_client kak_cursor_line kak_buf_line_count kak_window_height
        ( kakscroll scroll "$1" "$2" "${{kak_count:-0}}" "$3" "$4" </dev/null >/dev/null 2>&1 & )
    }}
}}

map global normal <c-d> ': kakscroll-launch d 1 {half} {speed}<ret>'
map global normal <c-u> ': kakscroll-launch u 1 {half} {speed}<ret>'
map global normal <c-f> ': kakscroll-launch d 0 {full} {speed}<ret>'
map global normal <c-b> ': kakscroll-launch u 0 {full} {speed}<ret>'
"#,
        half = scroll.half_duration_ms,
        full = scroll.full_duration_ms,
        speed = scroll.tick_size,
    )
}
