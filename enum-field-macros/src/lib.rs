use proc_macro::TokenStream;

mod codegen;

/// 声明一个宿主类型的封闭成员集合。
///
/// ```ignore
/// enum_field::enumeration! {
///     pub Color {
///         RED => Color::new("#ff0000"),
///         GREEN(id = 5) => Color::new("#00ff00"),
///         BLUE(seal = false),
///     }
/// }
/// ```
///
/// 生成：类型自有的静态注册表（`EnumHost` 实现）、每个成员一个类型化访问器
/// `Color::RED()`，以及一条 catalog 记录。未给出 `=> expr` 的成员由
/// `DefaultFactory` 构造（要求宿主类型实现 `Default`）。
#[proc_macro]
pub fn enumeration(input: TokenStream) -> TokenStream {
    codegen::entrypoint(input)
}
