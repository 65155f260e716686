use textbox_layout::{
    BoxSpec, FixedMetrics, HorizontalAlign, LocaleTable, Mm, Pt, RenderOptions, TextBoxLayout,
    VerticalAlign,
};

fn main() {
    // estimate with an average face; a renderer would supply real metrics
    let metrics = FixedMetrics::default();
    let locales = LocaleTable::builtin();

    // a US Letter surface, 792pt tall
    let surface = TextBoxLayout::new(&metrics, &locales, Pt(792.0));

    let bbox = BoxSpec::new(Mm(25.0), Mm(25.0), Mm(120.0), Mm(60.0));
    let options = RenderOptions::new(Pt(12.0))
        .with_line_height(Pt(14.0))
        .with_horizontal_align(HorizontalAlign::Center);
    println!("centered paragraph:");
    for line in surface.place_text(&lipsum::lipsum(40), bbox, &options) {
        println!("  ({:8.2}, {:8.2}) {}", line.coords.0, line.coords.1, line.text);
    }

    let bbox = BoxSpec::new(Mm(25.0), Mm(100.0), Mm(40.0), Mm(30.0));
    let options = RenderOptions::new(Pt(12.0))
        .with_vertical_align(VerticalAlign::Top)
        .with_locale("ja_JP");
    println!("japanese, wrapped between codepoints:");
    for line in surface.place_text("日本語の文章は、読点や句点で行を始めない。", bbox, &options) {
        println!("  ({:8.2}, {:8.2}) {}", line.coords.0, line.coords.1, line.text);
    }
}
