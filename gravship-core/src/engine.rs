use crate::error::SimError;
use crate::vector::Vector;

/// A fixed gravitating body
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vector,
    mass: f64,
    radius: f64, // visual only
}

impl Body {
    pub fn new(position: Vector, mass: f64, radius: f64) -> Result<Self, SimError> {
        if !position.is_finite() {
            return Err(SimError::invalid(format!(
                "body position must be finite, got {}",
                position
            )));
        }
        check_positive("body mass", mass)?;
        check_positive("body radius", radius)?;
        Ok(Self {
            position,
            mass,
            radius,
        })
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// The set of bodies pulling on the ship.
///
/// Bodies are kept in insertion order, which is also the order forces are
/// summed in. Two registries holding the same bodies in a different order
/// agree mathematically but are not guaranteed to agree bit-for-bit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl FromIterator<Body> for BodyRegistry {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BodyRegistry {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

/// Force exerted by body B on body A.
///
/// Points from A towards B with magnitude `g * mass_a * mass_b / |pos_a - pos_b|`.
/// This is an inverse-distance law, not inverse-square.
///
/// `pos_a` and `pos_b` must not coincide; if they do the result is
/// `SimError::DegenerateDistance`.
pub fn gravity_force(
    pos_a: Vector,
    mass_a: f64,
    pos_b: Vector,
    mass_b: f64,
    g: f64,
) -> Result<Vector, SimError> {
    let direction = pos_a
        .direction_to(pos_b)
        .ok_or(SimError::DegenerateDistance { position: pos_a })?;
    let distance = pos_a.subtract(pos_b).magnitude();

    Ok(direction.scale(g * mass_a * mass_b / distance))
}

/// Total force on a mass at `position` from every body in the registry,
/// summed in registry order
pub fn net_force(
    position: Vector,
    mass: f64,
    bodies: &BodyRegistry,
    g: f64,
) -> Result<Vector, SimError> {
    let mut total = Vector::ZERO;
    for body in bodies {
        total = total.add(gravity_force(position, mass, body.position, body.mass, g)?);
    }
    Ok(total)
}

pub(crate) fn check_positive(what: &str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(format!(
            "{} must be positive, got {}",
            what, value
        )))
    }
}
