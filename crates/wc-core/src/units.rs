// wc-core/src/units.rs

use uom::si::f64::Mass as UomMass;

// Public canonical unit types (SI, f64)
pub type Mass = UomMass;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn as_kg(m: Mass) -> f64 {
    use uom::si::mass::kilogram;
    m.get::<kilogram>()
}
