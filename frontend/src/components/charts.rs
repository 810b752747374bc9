//! Inline SVG charts for the overview and analytics pages.
//!
//! Geometry is computed by plain functions so it can be tested without a
//! browser; the components only lay the results out as SVG elements.

use shared::{ActivityPoint, RevenuePoint};
use yew::prelude::*;

pub const WIDTH: f64 = 600.0;
pub const HEIGHT: f64 = 240.0;
const PADDING: f64 = 32.0;

/// Largest value on the y axis, rounded up to a multiple of 1000 so the
/// grid lines land on round numbers.
pub fn axis_max(values: impl IntoIterator<Item = u32>) -> u32 {
    let max = values.into_iter().max().unwrap_or(0);
    max.div_ceil(1000).max(1) * 1000
}

/// Height in pixels of `value` on an axis topping out at `max`.
pub fn scale(value: u32, max: u32, height: f64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(value.min(max)) / f64::from(max) * height
}

/// Centre x coordinate of slot `index` out of `count` across the plot area.
pub fn slot_x(index: usize, count: usize) -> f64 {
    let plot = WIDTH - 2.0 * PADDING;
    let step = plot / count.max(1) as f64;
    PADDING + step * (index as f64 + 0.5)
}

/// SVG `points` attribute for a polyline through `values`.
pub fn polyline_points(values: &[u32], max: u32) -> String {
    let plot = HEIGHT - 2.0 * PADDING;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = slot_x(i, values.len());
            let y = HEIGHT - PADDING - scale(*value, max, plot);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn grid(max: u32) -> Html {
    let plot = HEIGHT - 2.0 * PADDING;
    html! {
        <>
        {for (0..=4u32).map(|step| {
            let value = max / 4 * step;
            let y = HEIGHT - PADDING - scale(value, max, plot);
            html! {
                <g key={step}>
                    <line x1={PADDING.to_string()} x2={(WIDTH - PADDING).to_string()}
                        y1={y.to_string()} y2={y.to_string()}
                        class="stroke-gray-200 dark:stroke-gray-700" stroke-dasharray="3 3" />
                    <text x={(PADDING - 4.0).to_string()} y={(y + 4.0).to_string()}
                        text-anchor="end" class="fill-gray-500 text-[10px]">
                        {value}
                    </text>
                </g>
            }
        })}
        </>
    }
}

fn month_labels<'a>(months: impl ExactSizeIterator<Item = &'a str>) -> Html {
    let count = months.len();
    html! {
        <>
        {for months.enumerate().map(|(i, month)| html! {
            <text key={i} x={slot_x(i, count).to_string()} y={(HEIGHT - PADDING + 16.0).to_string()}
                text-anchor="middle" class="fill-gray-500 text-[10px]">
                {month}
            </text>
        })}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub points: Vec<RevenuePoint>,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let values: Vec<u32> = props.points.iter().map(|p| p.value).collect();
    let max = axis_max(values.iter().copied());

    html! {
        <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} class="w-full h-64">
            {grid(max)}
            <polyline points={polyline_points(&values, max)} fill="none"
                stroke="#3b82f6" stroke-width="2" />
            {month_labels(props.points.iter().map(|p| p.month.as_str()))}
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub points: Vec<ActivityPoint>,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let max = axis_max(props.points.iter().flat_map(|p| [p.active, p.inactive]));
    let plot = HEIGHT - 2.0 * PADDING;
    let count = props.points.len();
    let bar = (WIDTH - 2.0 * PADDING) / count.max(1) as f64 / 3.0;

    html! {
        <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} class="w-full h-64">
            {grid(max)}
            {for props.points.iter().enumerate().map(|(i, point)| {
                let centre = slot_x(i, count);
                let active = scale(point.active, max, plot);
                let inactive = scale(point.inactive, max, plot);
                html! {
                    <g key={i}>
                        <rect x={(centre - bar).to_string()} y={(HEIGHT - PADDING - active).to_string()}
                            width={bar.to_string()} height={active.to_string()} fill="#10b981" />
                        <rect x={centre.to_string()} y={(HEIGHT - PADDING - inactive).to_string()}
                            width={bar.to_string()} height={inactive.to_string()} fill="#f59e0b" />
                    </g>
                }
            })}
            {month_labels(props.points.iter().map(|p| p.month.as_str()))}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(vec![4000, 3000, 2000] => 4000 ; "already round")]
    #[test_case(vec![9800, 2229] => 10000 ; "rounds up")]
    #[test_case(vec![] => 1000 ; "empty series")]
    fn test_axis_max(values: Vec<u32>) -> u32 {
        axis_max(values)
    }

    #[test]
    fn test_scale_is_proportional_and_clamped() {
        assert_eq!(scale(500, 1000, 200.0), 100.0);
        assert_eq!(scale(2000, 1000, 200.0), 200.0);
        assert_eq!(scale(5, 0, 200.0), 0.0);
    }

    #[test]
    fn test_polyline_has_one_point_per_value() {
        let points = polyline_points(&[4000, 3000, 2000, 2780, 1890, 2390], 4000);
        assert_eq!(points.split(' ').count(), 6);
        assert!(points.starts_with(&format!("{:.1},{:.1}", slot_x(0, 6), PADDING)));
    }
}
