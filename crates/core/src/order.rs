// crates/core/src/order.rs
//! Built-in concentric ordering.
//!
//! Declarations run from the outside of the box inwards: how the element is
//! placed, how it relates to siblings, its edges, and finally its content and
//! typography. Names are camelCase, matching CSS-in-JS objects; kebab-case
//! keys reach this table through [`crate::property::normalize_key`].

/// Default priority list, outermost concern first.
pub const DEFAULT_ORDER: &[&str] = &[
    // Resets
    "all",
    "appearance",

    // Box sizing
    "boxSizing",

    // Display and positioning
    "display",
    "position",
    "top",
    "right",
    "bottom",
    "left",

    "float",
    "clear",

    // Flex container
    "flex",
    "flexBasis",
    "flexDirection",
    "flexFlow",
    "flexGrow",
    "flexShrink",
    "flexWrap",

    // Grid
    "grid",
    "gridArea",
    "gridTemplate",
    "gridTemplateAreas",
    "gridTemplateRows",
    "gridTemplateColumns",
    "gridRow",
    "gridRowStart",
    "gridRowEnd",
    "gridColumn",
    "gridColumnStart",
    "gridColumnEnd",
    "gridAutoRows",
    "gridAutoColumns",
    "gridAutoFlow",
    "gridGap",
    "gridRowGap",
    "gridColumnGap",

    // Alignment
    "alignContent",
    "alignItems",
    "alignSelf",

    // Justification
    "justifyContent",
    "justifyItems",
    "justifySelf",

    // Ordering
    "order",

    // Multi-column
    "columns",
    "columnGap",
    "columnFill",
    "columnRule",
    "columnRuleWidth",
    "columnRuleStyle",
    "columnRuleColor",
    "columnSpan",
    "columnCount",
    "columnWidth",

    // Transforms
    "backfaceVisibility",
    "perspective",
    "perspectiveOrigin",
    "transform",
    "transformOrigin",
    "transformStyle",

    // Transitions
    "transition",
    "transitionDelay",
    "transitionDuration",
    "transitionProperty",
    "transitionTimingFunction",

    // Visibility and stacking
    "visibility",
    "opacity",
    "mixBlendMode",
    "isolation",
    "zIndex",

    // Margin
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",

    // Outline
    "outline",
    "outlineOffset",
    "outlineWidth",
    "outlineStyle",
    "outlineColor",

    // Border
    "border",
    "borderTop",
    "borderRight",
    "borderBottom",
    "borderLeft",
    "borderWidth",
    "borderTopWidth",
    "borderRightWidth",
    "borderBottomWidth",
    "borderLeftWidth",
    "borderStyle",
    "borderTopStyle",
    "borderRightStyle",
    "borderBottomStyle",
    "borderLeftStyle",
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderBottomColor",
    "borderLeftColor",
    "borderImage",
    "borderImageSource",
    "borderImageWidth",
    "borderImageOutset",
    "borderImageRepeat",
    "borderImageSlice",

    // Shadow
    "boxShadow",

    // Background
    "background",
    "backgroundAttachment",
    "backgroundClip",
    "backgroundColor",
    "backgroundImage",
    "backgroundOrigin",
    "backgroundPosition",
    "backgroundRepeat",
    "backgroundSize",
    "backgroundBlendMode",

    // Cursor
    "cursor",

    // Padding
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",

    // Sizing
    "width",
    "minWidth",
    "maxWidth",
    "height",
    "minHeight",
    "maxHeight",

    // Overflow
    "overflow",
    "overflowX",
    "overflowY",
    "resize",

    // Lists
    "listStyle",
    "listStyleType",
    "listStylePosition",
    "listStyleImage",
    "captionSide",

    // Tables
    "tableLayout",
    "borderCollapse",
    "borderSpacing",
    "emptyCells",

    // Animation
    "animation",
    "animationName",
    "animationDuration",
    "animationTimingFunction",
    "animationDelay",
    "animationIterationCount",
    "animationDirection",
    "animationFillMode",
    "animationPlayState",

    // Text
    "verticalAlign",
    "direction",
    "tabSize",
    "textAlign",
    "textAlignLast",
    "textJustify",
    "textIndent",
    "textTransform",
    "textDecoration",
    "textDecorationColor",
    "textDecorationLine",
    "textDecorationStyle",
    "textRendering",
    "textShadow",
    "textOverflow",
    "lineHeight",
    "wordSpacing",
    "letterSpacing",
    "whiteSpace",
    "wordBreak",
    "wordWrap",
    "color",

    // Font
    "font",
    "fontFamily",
    "fontKerning",
    "fontSize",
    "fontSizeAdjust",
    "fontStretch",
    "fontWeight",
    "fontSmoothing",
    "osxFontSmoothing",
    "fontVariant",
    "fontStyle",

    // Generated content
    "content",
    "quotes",
    "counterReset",
    "counterIncrement",

    // Paging
    "pageBreakBefore",
    "pageBreakAfter",
    "pageBreakInside",

    // Interaction
    "pointerEvents",
    "willChange",
];
