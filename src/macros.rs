#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! entry {
    (
        keyword: $keyword:expr,
        rank: $rank:expr,
        rules: [
            $( { decomp: $decomp:expr, reassembly: [ $($template:expr),+ $(,)? ] $(,)? } ),+ $(,)?
        ]
        $(,)?
    ) => {
        $crate::KeywordDef {
            keyword: $keyword.to_string(),
            rank: $rank,
            rules: vec![
                $(
                    $crate::RuleDef {
                        decomp: $decomp.to_string(),
                        reassembly: vec![ $( $template.to_string() ),+ ],
                    }
                ),+
            ],
        }
    };
}
