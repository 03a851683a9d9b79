//! Bridge from `FT_Outline_Decompose` callbacks to an [`OutlinePen`].

use freetype::ffi::{FT_Outline, FT_Vector};

use std::ffi::{c_int, c_void};

use crate::{path::Point, pen::OutlinePen};

/// Walks `outline` and forwards each command to `pen`.
///
/// On failure, returns the FreeType error code. Commands already delivered
/// to the pen are not rolled back.
pub(crate) fn decompose(outline: &FT_Outline, pen: &mut dyn OutlinePen) -> Result<(), c_int> {
    let mut ft_pen = FreeTypePen { inner: pen };
    let funcs = freetype::freetype_sys::FT_Outline_Funcs {
        move_to: ft_move_to,
        line_to: ft_line_to,
        conic_to: ft_conic_to,
        cubic_to: ft_cubic_to,
        delta: 0,
        shift: 0,
    };
    let error = unsafe {
        freetype::freetype_sys::FT_Outline_Decompose(
            outline as *const _ as *mut _,
            &funcs,
            (&mut ft_pen) as *mut FreeTypePen as *mut _,
        )
    };
    if error == 0 {
        Ok(())
    } else {
        Err(error)
    }
}

// `&mut dyn OutlinePen` is two words wide and cannot travel through the
// single `user` pointer, so the callbacks receive a pointer to this wrapper.
struct FreeTypePen<'a> {
    inner: &'a mut dyn OutlinePen,
}

fn point(p: *const FT_Vector) -> Point {
    // SAFETY: FreeType passes valid vectors for the duration of a callback
    let p = unsafe { &*p };
    Point::new(p.x as i64, p.y as i64)
}

fn ft_pen<'a>(user: *mut c_void) -> &'a mut FreeTypePen<'a> {
    // SAFETY: only valid because `decompose` passes &mut FreeTypePen as the
    // user parameter to FT_Outline_Decompose, and nothing else holds it
    unsafe { &mut *(user as *mut FreeTypePen) }
}

extern "C" fn ft_move_to(to: *const FT_Vector, user: *mut c_void) -> c_int {
    ft_pen(user).inner.move_to(point(to));
    0
}

extern "C" fn ft_line_to(to: *const FT_Vector, user: *mut c_void) -> c_int {
    ft_pen(user).inner.line_to(point(to));
    0
}

extern "C" fn ft_conic_to(
    control: *const FT_Vector,
    to: *const FT_Vector,
    user: *mut c_void,
) -> c_int {
    ft_pen(user).inner.quad_to(point(control), point(to));
    0
}

extern "C" fn ft_cubic_to(
    control1: *const FT_Vector,
    control2: *const FT_Vector,
    to: *const FT_Vector,
    user: *mut c_void,
) -> c_int {
    ft_pen(user)
        .inner
        .curve_to(point(control1), point(control2), point(to));
    0
}
