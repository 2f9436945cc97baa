//! Procedural macros for the solver-core framework

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro generating the `Puzzle` impl from `PartSolver<N>` impls.
///
/// Reads the part count from a `#[puzzle(max_parts = N)]` attribute and
/// produces a `solve_part` that dispatches part `k` (1-based) to
/// `<Self as PartSolver<k>>::solve`. Part numbers outside `1..=N` return
/// `SolveError::PartNotImplemented`.
///
/// # Requirements
///
/// The type must implement `InputParser` and `PartSolver<k>` for every
/// `k` in `1..=N`; a missing part impl is a compile-time error at the
/// generated dispatch arm.
///
/// # Example
///
/// ```ignore
/// use solver_core::{InputParser, PartSolver};
/// use solver_macros::Puzzle;
///
/// #[derive(Puzzle)]
/// #[puzzle(max_parts = 2)]
/// struct Day1Solver;
///
/// impl InputParser for Day1Solver { /* ... */ }
/// impl PartSolver<1> for Day1Solver { /* ... */ }
/// impl PartSolver<2> for Day1Solver { /* ... */ }
/// ```
#[proc_macro_derive(Puzzle, attributes(puzzle))]
pub fn derive_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let puzzle_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("Puzzle derive macro requires #[puzzle(max_parts = N)] attribute");

    let mut max_parts: Option<u8> = None;

    puzzle_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("max_parts") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    max_parts = Some(lit_int.base10_parse()?);
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[puzzle(...)] attribute");

    let max_parts = max_parts.expect("Missing required 'max_parts' attribute");
    assert!(max_parts >= 1, "'max_parts' must be at least 1");

    // One dispatch arm per part: k => <Self as PartSolver<k>>::solve(input)
    let arms = (1..=max_parts).map(|part| {
        let lit = proc_macro2::Literal::u8_unsuffixed(part);
        quote! {
            #lit => <Self as ::solver_core::PartSolver<#lit>>::solve(input),
        }
    });
    let parts_lit = proc_macro2::Literal::u8_unsuffixed(max_parts);

    let expanded = quote! {
        impl ::solver_core::Puzzle for #name {
            const PARTS: u8 = #parts_lit;

            fn solve_part(
                input: &mut <Self as ::solver_core::InputParser>::Input<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::solver_core::SolveError> {
                match part {
                    #(#arms)*
                    other => ::core::result::Result::Err(
                        ::solver_core::SolveError::PartNotImplemented(other),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering puzzles with the plugin system
///
/// Generates an `inventory::submit!` of a `PuzzlePlugin` so the puzzle is
/// discovered by `RegistryBuilder::register_all_plugins` without manual
/// wiring.
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["ranges", "grid"])
///
/// # Requirements
///
/// The type must implement the `Puzzle` trait. If it doesn't, the generated
/// bound check produces a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Puzzle` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use solver_macros::AutoRegisterPuzzle;
///
/// #[derive(AutoRegisterPuzzle)]
/// #[advent(year = 2023, day = 5, tags = ["ranges"])]
/// struct Day5Solver;
///
/// // ... InputParser / PartSolver / Puzzle impls
/// ```
#[proc_macro_derive(AutoRegisterPuzzle, attributes(advent))]
pub fn derive_auto_register_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let advent_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("advent"))
        .expect("AutoRegisterPuzzle derive macro requires #[advent(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    advent_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?;
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[advent(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements the Puzzle trait,
        // for a clearer error than the inventory expansion would give
        const _: () = {
            trait MustImplementPuzzle: ::solver_core::Puzzle {}
            impl MustImplementPuzzle for #name {}
        };

        ::solver_core::inventory::submit! {
            ::solver_core::PuzzlePlugin {
                year: #year,
                day: #day,
                puzzle: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
